//! Macros for declaring controller states.

/// Generate a `State` trait implementation for a fieldless enum.
///
/// The enum always derives `Clone`, `PartialEq`, `Debug`, `Serialize` and
/// `Deserialize`; extra derives can be passed as attributes. `name` returns
/// the variant identifier.
///
/// # Example
///
/// ```
/// use lights_out::core::State;
/// use lights_out::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum Screen {
///         Title,
///         Board,
///     }
/// }
///
/// assert_eq!(Screen::Board.name(), "Board");
/// ```
#[macro_export]
macro_rules! state_enum {
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
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
