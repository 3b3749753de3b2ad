//! Type discriminants for abilities, interactions and tasks.
//!
//! A [`Kind`] is captured when a value is registered with an actor or a task,
//! and lookups compare kinds for exact type equality.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Exact runtime type of a registered ability, interaction or task
#[derive(Clone, Copy)]
pub struct Kind {
    id: TypeId,
    type_name: &'static str,
}

impl Kind {
    /// Kind of the type `T`
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified type name
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Type name with module paths stripped, e.g. `UsePage<MockPage>`
    #[must_use]
    pub fn name(&self) -> String {
        short_type_name(self.type_name)
    }

    /// Whether this kind is exactly `T`
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Kind").field(&self.type_name).finish()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Strip module paths from every path segment of a type name
pub(crate) fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut start = 0;
    for (i, c) in full.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';') {
            out.push_str(last_segment(&full[start..i]));
            out.push(c);
            start = i + c.len_utf8();
        }
    }
    out.push_str(last_segment(&full[start..]));
    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PageAbility;
    struct Wrapper<T>(T);

    mod kind_tests {
        use super::*;

        #[test]
        fn test_same_type_same_kind() {
            assert_eq!(Kind::of::<PageAbility>(), Kind::of::<PageAbility>());
            assert!(Kind::of::<PageAbility>().is::<PageAbility>());
        }

        #[test]
        fn test_distinct_types_differ() {
            assert_ne!(Kind::of::<PageAbility>(), Kind::of::<String>());
            assert_ne!(
                Kind::of::<Wrapper<u8>>(),
                Kind::of::<Wrapper<u16>>(),
                "generic instantiations are distinct kinds"
            );
        }

        #[test]
        fn test_name_is_short() {
            assert_eq!(Kind::of::<PageAbility>().name(), "PageAbility");
            assert_eq!(Kind::of::<PageAbility>().to_string(), "PageAbility");
            assert!(Kind::of::<PageAbility>().type_name().contains("::"));
        }

        #[test]
        fn test_generic_name_is_short() {
            assert_eq!(
                Kind::of::<Wrapper<PageAbility>>().name(),
                "Wrapper<PageAbility>"
            );
        }
    }

    mod short_type_name_tests {
        use super::*;

        #[test]
        fn test_plain_path() {
            assert_eq!(short_type_name("a::b::Page"), "Page");
        }

        #[test]
        fn test_nested_generics() {
            assert_eq!(
                short_type_name("a::UseBrowser<b::Browser, c::d::Page>"),
                "UseBrowser<Browser, Page>"
            );
        }

        #[test]
        fn test_references_and_tuples() {
            assert_eq!(short_type_name("(&a::B, [c::D; 2])"), "(&B, [D; 2])");
        }

        #[test]
        fn test_no_path() {
            assert_eq!(short_type_name("u32"), "u32");
        }
    }
}
