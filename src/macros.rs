// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, &str, Cow
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! rule {
    // Horizontal rule for console tables: rule!('=') is 80 wide.
    ($ch:expr) => {
        $crate::rule!($ch, 80)
    };
    ($ch:expr, $width:expr) => {
        ::std::iter::repeat($ch).take($width).collect::<::std::string::String>()
    };
}
