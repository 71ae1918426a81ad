mod type_name;

pub(crate) use type_name::short_type_name;
