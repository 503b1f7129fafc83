//! Public, private and "protected" members.
//!
//! Rust has no per-class access modifiers. Privacy is per module and is
//! checked at compile time:
//! - `pub` fields are reachable from anywhere
//! - plain fields are reachable only inside the defining module
//! - `pub(super)` widens a field to the parent module, which is the closest
//!   match for "visible to the type and the types built on it"

pub use private::PrivateMovie;
pub use protected::ProtectedMovie;

/// Everything is public.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicMovie {
    pub title: String,
    pub director: String,
}

impl PublicMovie {
    pub fn new(title: impl Into<String>, director: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
        }
    }

    pub fn details(&self) -> String {
        format!("{} by {}", self.title, self.director)
    }
}

mod private {
    /// Fields and the formatting helper are private to this module.
    #[derive(Debug, Clone)]
    pub struct PrivateMovie {
        title: String,
        director: String,
    }

    impl PrivateMovie {
        pub fn new(title: impl Into<String>, director: impl Into<String>) -> Self {
            Self {
                title: title.into(),
                director: director.into(),
            }
        }

        fn details(&self) -> String {
            format!("{} by {}", self.title, self.director)
        }

        pub fn show_details(&self) -> String {
            self.details()
        }
    }
}

mod protected {
    #[derive(Debug, Clone)]
    pub struct ProtectedMovie {
        pub(super) title: String,
        pub(super) director: String,
    }

    impl ProtectedMovie {
        pub fn new(title: impl Into<String>, director: impl Into<String>) -> Self {
            Self {
                title: title.into(),
                director: director.into(),
            }
        }

        fn details(&self) -> String {
            format!("{} by {}", self.title, self.director)
        }

        pub fn show_details(&self) -> String {
            self.details()
        }
    }
}

/// Builds on `ProtectedMovie`. It lives in the parent of `protected`, which is
/// exactly the scope `pub(super)` opens, so it reads the fields directly.
#[derive(Debug, Clone)]
pub struct DirectorsCut {
    base: ProtectedMovie,
    extra_minutes: u32,
}

impl DirectorsCut {
    pub fn new(base: ProtectedMovie, extra_minutes: u32) -> Self {
        Self {
            base,
            extra_minutes,
        }
    }

    pub fn show_details(&self) -> String {
        format!(
            "{} (director's cut, +{} min, dir. {})",
            self.base.title, self.extra_minutes, self.base.director
        )
    }
}
