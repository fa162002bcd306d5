use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A point along an element or the viewport, as a fraction of its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f32),
}

impl Edge {
    pub fn fraction(self) -> f32 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
            Edge::Fraction(f) => f,
        }
    }
}

impl FromStr for Edge {
    type Err = OffsetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Edge::Start),
            "center" => Ok(Edge::Center),
            "end" => Ok(Edge::End),
            other => other
                .parse::<f32>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Edge::Fraction)
                .ok_or_else(|| OffsetParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Start => f.write_str("start"),
            Edge::Center => f.write_str("center"),
            Edge::End => f.write_str("end"),
            Edge::Fraction(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid scroll offset: {0}")]
pub struct OffsetParseError(pub String);

/// "`target` edge of the region meets `container` edge of the viewport".
///
/// Written as two words, e.g. `"start end"`: the region's start lines up with
/// the viewport's end (the region is just entering from below).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetRule {
    pub target: Edge,
    pub container: Edge,
}

impl OffsetRule {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }
}

impl FromStr for OffsetRule {
    type Err = OffsetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(target), Some(container), None) => Ok(Self {
                target: target.parse()?,
                container: container.parse()?,
            }),
            _ => Err(OffsetParseError(s.to_string())),
        }
    }
}

impl fmt::Display for OffsetRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.container)
    }
}

/// The pair of alignment rules that define progress 0 and progress 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[String; 2]", into = "[String; 2]")]
pub struct ScrollOffset {
    pub from: OffsetRule,
    pub to: OffsetRule,
}

impl ScrollOffset {
    /// From the region entering at the bottom until its top reaches the top.
    pub const ENTER_TO_TOP: ScrollOffset = ScrollOffset {
        from: OffsetRule::new(Edge::Start, Edge::End),
        to: OffsetRule::new(Edge::Start, Edge::Start),
    };

    /// From the region's top at the viewport top until its bottom reaches
    /// the viewport bottom.
    pub const TRAVERSE: ScrollOffset = ScrollOffset {
        from: OffsetRule::new(Edge::Start, Edge::Start),
        to: OffsetRule::new(Edge::End, Edge::End),
    };
}

impl TryFrom<[String; 2]> for ScrollOffset {
    type Error = OffsetParseError;

    fn try_from(value: [String; 2]) -> Result<Self, Self::Error> {
        Ok(Self {
            from: value[0].parse()?,
            to: value[1].parse()?,
        })
    }
}

impl From<ScrollOffset> for [String; 2] {
    fn from(offset: ScrollOffset) -> Self {
        [offset.from.to_string(), offset.to.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keyword_and_numeric_rules() {
        let rule: OffsetRule = "start end".parse().unwrap();
        assert_eq!(rule, OffsetRule::new(Edge::Start, Edge::End));

        let rule: OffsetRule = "0.25 center".parse().unwrap();
        assert_eq!(rule, OffsetRule::new(Edge::Fraction(0.25), Edge::Center));

        assert!("start".parse::<OffsetRule>().is_err());
        assert!("start end extra".parse::<OffsetRule>().is_err());
        assert!("top end".parse::<OffsetRule>().is_err());
    }

    #[test]
    fn offsets_serialize_as_rule_strings() {
        let json = serde_json::to_string(&ScrollOffset::TRAVERSE).unwrap();
        assert_eq!(json, r#"["start start","end end"]"#);
        let back: ScrollOffset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ScrollOffset::TRAVERSE);
    }
}
