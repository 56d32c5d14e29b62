use indexmap::IndexMap;

/// Attributes of an element, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Props {
    pub attrs: IndexMap<String, String>,
}

impl Props {
    pub fn new() -> Self {
        Self {
            attrs: IndexMap::new(),
        }
    }
    pub fn set(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.attrs.insert(k.into(), v.into());
        self
    }
    pub fn get(&self, k: &str) -> Option<&str> {
        self.attrs.get(k).map(String::as_str)
    }
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
    pub fn len(&self) -> usize {
        self.attrs.len()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// Allow concise props creation
impl From<()> for Props {
    fn from(_: ()) -> Self {
        Props::default()
    }
}
impl From<Option<Props>> for Props {
    fn from(p: Option<Props>) -> Self {
        p.unwrap_or_default()
    }
}
impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Props {
    fn from(v: Vec<(K, V)>) -> Self {
        v.into_iter().collect()
    }
}
impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Props {
    fn from(v: [(K, V); N]) -> Self {
        v.into_iter().collect()
    }
}
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Scalar {
    Null,
    Str(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
}

#[cfg(feature = "serde")]
impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Null => "null".to_string(),
            Scalar::Str(s) => s,
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::UInt(u) => u.to_string(),
            Scalar::Float(f) => float_text(f),
        }
    }
}

/// Number formatting of a host string conversion: no negative zero, and
/// exponent form outside `1e-6..1e21`.
#[cfg(feature = "serde")]
fn float_text(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let abs = f.abs();
    if (1e-6..1e21).contains(&abs) {
        return f.to_string();
    }
    let s = format!("{f:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

/// Accepts `null`, or an object whose values are strings, numbers, booleans
/// or `null`. Scalars are stored in their textual form; nested objects and
/// arrays are rejected.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Props {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = <Option<IndexMap<String, Scalar>> as serde::Deserialize>::deserialize(d)?;
        Ok(raw
            .into_iter()
            .flatten()
            .map(|(k, v)| (k, v.into_text()))
            .collect())
    }
}
