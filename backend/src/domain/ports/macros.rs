//! `define_port_error!` generates a `thiserror` enum for a port together with
//! snake_case constructors, so adapters write `DataError::not_found()` or
//! `EventStoreError::storage(msg)`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
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
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum SamplePortError {
            Missing => "missing",
            Upstream { message: String } => "upstream failed: {message}",
            Status { code: u16, message: String } => "status {code}: {message}",
        }
    }

    #[test]
    fn unit_variants_get_snake_case_constructors() {
        assert_eq!(SamplePortError::missing(), SamplePortError::Missing);
        assert_eq!(SamplePortError::missing().to_string(), "missing");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::upstream("timeout");
        assert_eq!(err.to_string(), "upstream failed: timeout");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::status(503_u16, "busy");
        assert_eq!(err.to_string(), "status 503: busy");
    }
}
