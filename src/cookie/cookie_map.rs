use std::{borrow::Borrow, collections::HashMap, hash::Hash, ops::Deref};

/// Cookie names mapped to their values, as produced by a cookie parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieMap {
    cookies: HashMap<String, String>,
}

impl CookieMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<Q>(&self, name: &Q) -> Option<&str>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cookies.get(name).map(String::as_str)
    }

    /// Inserts a cookie, replacing any previous value stored under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.cookies.insert(name.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cookies
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N, V> FromIterator<(N, V)> for CookieMap
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            cookies: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Plain cookies of a request.
///
/// Inserted into the request extensions by the upstream cookie parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookies(pub CookieMap);

/// Cookies of a request whose signature has already been verified by the upstream cookie parser.
///
/// Kept apart from [`Cookies`] so that an unsigned cookie can never be mistaken for a signed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignedCookies(pub CookieMap);

impl Deref for Cookies {
    type Target = CookieMap;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for SignedCookies {
    type Target = CookieMap;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<N, V> FromIterator<(N, V)> for Cookies
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<N, V> FromIterator<(N, V)> for SignedCookies
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_replace_earlier_ones() {
        let mut cookies: CookieMap = [("token", "old")].into_iter().collect();

        assert_eq!(cookies.insert("token", "new"), Some(String::from("old")));
        assert_eq!(cookies.get("token"), Some("new"));
        assert_eq!(cookies.len(), 1);
    }
}
