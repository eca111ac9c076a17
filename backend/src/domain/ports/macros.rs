//! Helper macro for declaring port error enums.
//!
//! Each adapter boundary gets its own error enum with a display message per
//! variant and a snake_case constructor that accepts `impl Into<T>` for every
//! field, so call sites can pass `&str` where the variant stores a `String`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]( $( $($field: impl Into<$ty>),* )? ) -> Self {
                        Self::$variant $( { $($field: $field.into()),* } )?
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;
