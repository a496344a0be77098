//! Declaration macros for typed dummy objects.

/// Declare a struct together with its descriptor table.
///
/// The struct must implement `Default`, which serves as its no-argument
/// constructor. Field types must implement
/// [`DummyField`](crate::typed::DummyField); self-referential fields go
/// through `Option<Box<_>>` or `Vec<_>`.
///
/// ```
/// use dummy_generator::{dummy_object, Populator};
///
/// dummy_object! {
///     #[derive(Debug, Default)]
///     pub struct Phone {
///         pub number: String,
///         pub area: i32,
///     }
/// }
///
/// let phone: Phone = Populator::default().create().unwrap();
/// assert_eq!(phone.number.len(), 10);
/// assert!((1..10).contains(&phone.area));
/// ```
#[macro_export]
macro_rules! dummy_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::typed::DummyField for $name {
            fn type_ref() -> $crate::TypeRef {
                $crate::TypeRef::named(stringify!($name))
            }

            fn register(
                registry: &mut $crate::TypeRegistry,
            ) -> ::std::result::Result<(), $crate::PopulateError> {
                if $crate::typed::begin_registration::<Self>(registry)? {
                    $(
                        <$field_ty as $crate::typed::DummyField>::register(registry)?;
                    )*
                }
                Ok(())
            }

            fn from_dummy_value(
                value: $crate::DummyValue,
            ) -> ::std::result::Result<Self, $crate::PopulateError> {
                $crate::typed::composite_from_value::<Self>(value)
            }
        }

        impl $crate::typed::Dummy for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn construct() -> ::std::result::Result<Self, ::std::string::String> {
                Ok(<Self as ::std::default::Default>::default())
            }

            fn fields() -> ::std::vec::Vec<$crate::typed::FieldSetter<Self>> {
                vec![
                    $(
                        $crate::typed::FieldSetter::<Self> {
                            name: stringify!($field),
                            ty: <$field_ty as $crate::typed::DummyField>::type_ref(),
                            set: |target: &mut Self, value: $crate::DummyValue| {
                                target.$field =
                                    <$field_ty as $crate::typed::DummyField>::from_dummy_value(value)
                                        .map_err(|e| e.at_field(stringify!($name), stringify!($field)))?;
                                Ok(())
                            },
                        },
                    )*
                ]
            }
        }
    };
}

/// Declare a unit-variant enum together with its constant table.
///
/// ```
/// use dummy_generator::dummy_enum;
/// use dummy_generator::typed::DummyEnum;
///
/// dummy_enum! {
///     #[derive(Debug, PartialEq)]
///     pub enum PhoneKind {
///         Mobile,
///         Home,
///     }
/// }
///
/// assert_eq!(PhoneKind::CONSTANTS, &["Mobile", "Home"]);
/// assert_eq!(PhoneKind::from_constant("Home"), Some(PhoneKind::Home));
/// ```
#[macro_export]
macro_rules! dummy_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $crate::typed::DummyField for $name {
            fn type_ref() -> $crate::TypeRef {
                $crate::TypeRef::named(stringify!($name))
            }

            fn register(
                registry: &mut $crate::TypeRegistry,
            ) -> ::std::result::Result<(), $crate::PopulateError> {
                $crate::typed::register_enum::<Self>(registry)
            }

            fn from_dummy_value(
                value: $crate::DummyValue,
            ) -> ::std::result::Result<Self, $crate::PopulateError> {
                $crate::typed::enum_from_value::<Self>(value)
            }
        }

        impl $crate::typed::DummyEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            const CONSTANTS: &'static [&'static str] = &[$(stringify!($variant)),*];

            fn from_constant(constant: &str) -> ::std::option::Option<Self> {
                $(
                    if constant == stringify!($variant) {
                        return Some(Self::$variant);
                    }
                )*
                None
            }
        }
    };
}
