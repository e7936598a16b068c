#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! placeholder {
    ($symbol:literal, $name:literal, $pat:literal, $classes:expr) => {
        $crate::Rule {
            symbol: $symbol,
            name: $name,
            pattern: $crate::regex!($pat),
            kind: $crate::RuleKind::Placeholder,
            classes: $classes,
        }
    };
}

#[macro_export]
macro_rules! literal {
    ($symbol:literal, $name:literal, $pat:literal) => {
        $crate::Rule {
            symbol: $symbol,
            name: $name,
            pattern: $crate::regex!($pat),
            kind: $crate::RuleKind::Literal,
            classes: $crate::CharClasses::empty(),
        }
    };
}

/// Step trace: a `tracing` debug event with the `tracing` feature, otherwise a
/// stderr line when `MASKFMT_DEBUG_STEPS` is set.
#[macro_export]
macro_rules! debug_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
        #[cfg(not(feature = "tracing"))]
        {
            if $crate::debug_steps_enabled() {
                eprintln!($($arg)*);
            }
        }
    }};
}
