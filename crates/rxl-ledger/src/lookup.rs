use serde::{Deserialize, Serialize};

/// Outcome of a lookup by drug id.
///
/// `NotFound` is an ordinary value. Callers branch on it the same way for
/// queries and for custody transfers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn as_ref(&self) -> Lookup<&T> {
        match self {
            Self::Found(value) => Lookup::Found(value),
            Self::NotFound => Lookup::NotFound,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::NotFound => Lookup::NotFound,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Found(value),
            None => Self::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option() {
        assert_eq!(Lookup::from(Some(3)), Lookup::Found(3));
        assert_eq!(Lookup::<i32>::from(None), Lookup::NotFound);
    }

    #[test]
    fn map_and_into_option() {
        let found = Lookup::Found(2).map(|n| n * 10);
        assert!(found.is_found());
        assert_eq!(found.into_option(), Some(20));

        let missing: Lookup<i32> = Lookup::NotFound;
        assert!(missing.is_not_found());
        assert_eq!(missing.map(|n| n + 1).into_option(), None);
    }

    #[test]
    fn as_ref_borrows() {
        let found = Lookup::Found(String::from("D1"));
        assert_eq!(found.as_ref().map(|s| s.len()), Lookup::Found(2));
        assert!(found.is_found());
    }
}
