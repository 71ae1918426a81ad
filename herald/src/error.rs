use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),

    #[error("Event arguments must be of type {0}")]
    ArgsType(Cow<'static, str>),
}

impl Error {
    pub(crate) fn args_type<T: ?Sized>() -> Self {
        Error::ArgsType(crate::internal::short_type_name::<T>().into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_args_type(&self) -> bool {
        matches!(self, Error::ArgsType(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueArgs;

    #[test]
    fn test_args_type_message_names_expected_type() {
        let err = Error::args_type::<ValueArgs<u32>>();
        assert!(err.is_args_type());
        assert_eq!(
            err.to_string(),
            "Event arguments must be of type ValueArgs<u32>"
        );
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::InvalidArgument("handler is absent".into());
        assert!(err.is_invalid_argument());
        assert!(!err.is_args_type());
        assert_eq!(err.to_string(), "Invalid argument: handler is absent");
    }
}
