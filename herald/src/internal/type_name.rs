use std::any::type_name;

/// Returns the type name of `T` with every module path stripped,
/// including inside generic arguments (`a::B<c::D>` becomes `B<D>`).
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut path_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                out.truncate(path_start);
            }
            c if c.is_alphanumeric() || c == '_' => out.push(c),
            c => {
                out.push(c);
                path_start = out.len();
            }
        }
    }
    out
}
