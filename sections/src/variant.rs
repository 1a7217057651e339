//! Per-component layout variants.
//!
//! Every section component owns a closed variant enum with a default member.
//! Parsing is total: an absent or unrecognized variant string resolves to the
//! default, so `Some("bogus")` and `None` render identically.

/// Parse a free-form variant string into a closed layout enum.
pub trait Variant: Copy + Default + Sized + 'static {
    /// Accepted names paired with their variant.
    const NAMES: &'static [(&'static str, Self)];

    /// Resolve an authored value, falling back to the default.
    fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|name| {
            Self::NAMES
                .iter()
                .find(|(candidate, _)| *candidate == name)
                .map(|(_, variant)| *variant)
        })
        .unwrap_or_default()
    }

    /// Canonical name of this variant.
    fn name(self) -> &'static str;
}

/// Declares a layout enum plus its [`Variant`] impl.
///
/// The first listed member is the default.
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $default:ident => $default_str:literal,
            $($member:ident => $member_str:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub enum $name {
            #[default]
            $default,
            $($member),*
        }

        impl $crate::variant::Variant for $name {
            const NAMES: &'static [(&'static str, Self)] = &[
                ($default_str, $name::$default),
                $(($member_str, $name::$member)),*
            ];

            fn name(self) -> &'static str {
                match self {
                    $name::$default => $default_str,
                    $($name::$member => $member_str),*
                }
            }
        }
    };
}

pub(crate) use variant_enum;

#[cfg(test)]
mod tests {
    use super::*;

    variant_enum! {
        /// Test-only layout.
        pub enum Layout {
            Grid => "grid",
            List => "list",
        }
    }

    #[test]
    fn unknown_and_absent_resolve_to_default() {
        assert_eq!(Layout::parse(None), Layout::Grid);
        assert_eq!(Layout::parse(Some("carousel")), Layout::Grid);
        assert_eq!(Layout::parse(Some("List")), Layout::Grid);
        assert_eq!(Layout::parse(Some("list")), Layout::List);
    }

    #[test]
    fn names_round_trip() {
        for (name, variant) in Layout::NAMES {
            assert_eq!(variant.name(), *name);
        }
    }
}
