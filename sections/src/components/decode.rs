//! Best-effort decoding of a props bag.
//!
//! A bag that decodes cleanly is taken as-is. Otherwise it is rebuilt one
//! value at a time: every field and list item is kept as long as the content
//! type still decodes with it in place. Scalars of the wrong kind get one
//! retry as string or number, and anything else that does not fit is dropped
//! so its default applies. Each repair is reported as [`PropsIssue::Invalid`].

use std::collections::BTreeSet;
use std::fmt::Write as _;

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use super::PropsIssue;

/// Decoded content plus the top-level keys that had to be repaired.
pub(crate) struct Decoded<C> {
    pub content: C,
    pub repaired: BTreeSet<String>,
}

pub(crate) fn decode_props<C>(
    props: &Map<String, Value>,
    issues: &mut Vec<PropsIssue>,
) -> Decoded<C>
where
    C: DeserializeOwned + Default,
{
    let strict = Value::Object(props.clone());
    if let Ok(content) = C::deserialize(&strict) {
        return Decoded {
            content,
            repaired: BTreeSet::new(),
        };
    }

    let mut repair = Repair::<C> {
        root: Value::Object(Map::new()),
        issues,
        repaired: BTreeSet::new(),
        content: std::marker::PhantomData,
    };
    let mut path = Vec::new();
    for (key, value) in props {
        path.push(Step::Key(key.clone()));
        repair.graft(&mut path, value.clone());
        path.pop();
    }

    Decoded {
        content: C::deserialize(&repair.root).unwrap_or_default(),
        repaired: repair.repaired,
    }
}

#[derive(Clone, Debug)]
enum Step {
    Key(String),
    Index(usize),
}

struct Repair<'a, C> {
    /// Everything accepted so far; always decodes as `C`.
    root: Value,
    issues: &'a mut Vec<PropsIssue>,
    repaired: BTreeSet<String>,
    content: std::marker::PhantomData<C>,
}

impl<C> Repair<'_, C>
where
    C: DeserializeOwned + Default,
{
    fn check(&self) -> Result<(), serde_json::Error> {
        C::deserialize(&self.root).map(|_| ())
    }

    /// Place `value` at `path`, shrinking it until the root decodes again.
    fn graft(&mut self, path: &mut Vec<Step>, value: Value) {
        self.place(path, value.clone());
        let err = match self.check() {
            Ok(()) => return,
            Err(err) => err,
        };

        match value {
            Value::Object(fields) => {
                self.place(path, Value::Object(Map::new()));
                if self.check().is_err() {
                    self.reject(path, &err);
                    return;
                }
                for (key, child) in fields {
                    path.push(Step::Key(key));
                    self.graft(path, child);
                    path.pop();
                }
            }
            Value::Array(items) => {
                self.place(path, Value::Array(Vec::new()));
                if self.check().is_err() {
                    self.reject(path, &err);
                    return;
                }
                for item in items {
                    let index = self.len_at(path);
                    path.push(Step::Index(index));
                    self.graft(path, item);
                    path.pop();
                }
            }
            scalar => {
                if let Some(coerced) = coerce(&scalar) {
                    self.place(path, coerced);
                    if self.check().is_ok() {
                        self.note(path, &err);
                        return;
                    }
                }
                self.reject(path, &err);
            }
        }
    }

    fn slot(&mut self, path: &[Step]) -> Option<&mut Value> {
        path.iter().try_fold(&mut self.root, |node, step| match step {
            Step::Key(key) => node.get_mut(key.as_str()),
            Step::Index(index) => node.get_mut(*index),
        })
    }

    fn len_at(&mut self, path: &[Step]) -> usize {
        self.slot(path)
            .and_then(|node| node.as_array())
            .map_or(0, Vec::len)
    }

    fn place(&mut self, path: &[Step], value: Value) {
        let Some((last, parent)) = path.split_last() else {
            return;
        };
        match (self.slot(parent), last) {
            (Some(Value::Object(map)), Step::Key(key)) => {
                map.insert(key.clone(), value);
            }
            (Some(Value::Array(items)), Step::Index(index)) => match items.get_mut(*index) {
                Some(existing) => *existing = value,
                None => items.push(value),
            },
            _ => {}
        }
    }

    fn reject(&mut self, path: &[Step], err: &serde_json::Error) {
        if let Some((last, parent)) = path.split_last() {
            match (self.slot(parent), last) {
                (Some(Value::Object(map)), Step::Key(key)) => {
                    map.remove(key);
                }
                (Some(Value::Array(items)), Step::Index(index)) if *index < items.len() => {
                    items.remove(*index);
                }
                _ => {}
            }
        }
        self.note(path, err);
    }

    fn note(&mut self, path: &[Step], err: &serde_json::Error) {
        if let Some(Step::Key(top)) = path.first() {
            self.repaired.insert(top.clone());
        }
        self.issues
            .push(PropsIssue::Invalid(format!("{}: {}", display_path(path), err)));
    }
}

/// Numbers and booleans read as text; numeric text reads as a number.
fn coerce(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) => Some(Value::String(n.to_string())),
        Value::Bool(b) => Some(Value::String(b.to_string())),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .map(Number::from)
                .or_else(|| s.parse::<f64>().ok().and_then(Number::from_f64))
                .map(Value::Number)
        }
        _ => None,
    }
}

fn display_path(path: &[Step]) -> String {
    let mut out = String::new();
    for step in path {
        match step {
            Step::Key(key) if out.is_empty() => out.push_str(key),
            Step::Key(key) => {
                let _ = write!(out, ".{}", key);
            }
            Step::Index(index) => {
                let _ = write!(out, "[{}]", index);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Review {
        author: String,
        rating: f64,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Reviews {
        title: String,
        price: String,
        reviews: Vec<Review>,
    }

    fn decode(value: Value) -> (Decoded<Reviews>, Vec<PropsIssue>) {
        let Value::Object(props) = value else {
            panic!("props must be an object");
        };
        let mut issues = Vec::new();
        let decoded = decode_props(&props, &mut issues);
        (decoded, issues)
    }

    #[test]
    fn clean_props_report_nothing() {
        let (decoded, issues) = decode(json!({
            "title": "Reviews",
            "reviews": [{ "author": "Ana", "rating": 5 }]
        }));
        assert!(issues.is_empty());
        assert!(decoded.repaired.is_empty());
        assert_eq!(decoded.content.reviews.len(), 1);
    }

    #[test]
    fn broken_item_is_dropped_and_siblings_kept() {
        let (decoded, issues) = decode(json!({
            "title": "Reviews",
            "reviews": [
                { "author": "Ana", "rating": 5 },
                "not a review",
                { "author": "Carla", "rating": 4 }
            ]
        }));
        let authors: Vec<_> = decoded
            .content
            .reviews
            .iter()
            .map(|r| r.author.as_str())
            .collect();
        assert_eq!(authors, vec!["Ana", "Carla"]);
        assert_eq!(decoded.content.title, "Reviews");
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0],
            PropsIssue::Invalid(reason) if reason.starts_with("reviews[1]")
        ));
    }

    #[test]
    fn mistyped_field_falls_back_inside_item() {
        let (decoded, issues) = decode(json!({
            "reviews": [{ "author": "Bruno", "rating": { "stars": 5 } }]
        }));
        assert_eq!(
            decoded.content.reviews,
            vec![Review {
                author: "Bruno".into(),
                rating: 0.0
            }]
        );
        assert!(matches!(
            &issues[..],
            [PropsIssue::Invalid(reason)] if reason.starts_with("reviews[0].rating")
        ));
    }

    #[test]
    fn scalars_are_coerced_between_text_and_number() {
        let (decoded, issues) = decode(json!({
            "price": 99,
            "reviews": [{ "author": "Ana", "rating": "4.5" }]
        }));
        assert_eq!(decoded.content.price, "99");
        assert_eq!(decoded.content.reviews[0].rating, 4.5);
        assert_eq!(issues.len(), 2);
        assert!(decoded.repaired.contains("price"));
        assert!(decoded.repaired.contains("reviews"));
    }

    #[test]
    fn null_field_takes_its_default() {
        let (decoded, issues) = decode(json!({ "title": null, "price": "R$ 10" }));
        assert_eq!(decoded.content.title, "");
        assert_eq!(decoded.content.price, "R$ 10");
        assert_eq!(issues.len(), 1);
    }
}
