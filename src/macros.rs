#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[macro_export]
/// Build a [`PolySet`][crate::PolySet] from a list of member literals, using
/// the default [`Config`][crate::Config] and hasher.
///
/// ## Example
///
/// ```
/// use polyset::polyset;
///
/// let s = polyset!["1", "2", "3"];
/// assert_eq!(s.size(), 3);
/// assert!(s.contains(b"1"));
/// ```
macro_rules! polyset {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut set = $crate::PolySet::new($crate::Config::default(), $crate::Element::from($first));
        $( set.add($crate::Element::from($rest)); )*
        set
    }};
}
