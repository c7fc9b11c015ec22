//! 通用类型定义：权重、顶点命名规则和图配置

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权重（全序）
pub type Weight = i64;

/// 字母命名最多支持的顶点数
pub const MAX_LETTER_VERTICES: usize = 26;

/// 顶点命名规则
///
/// 决定内部下标 `i` 如何映射到对外可见的顶点名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexNamingConvention {
    /// 0, 1, 2, ...
    #[default]
    SequentialFromZero,
    /// 1, 2, 3, ...
    SequentialFromOne,
    /// a, b, c, ... 最多 26 个
    LowercaseLetters,
}

impl VertexNamingConvention {
    /// 检查该规则能否为 `count` 个顶点命名
    pub fn check_capacity(&self, count: usize) -> Result<()> {
        match self {
            VertexNamingConvention::LowercaseLetters if count > MAX_LETTER_VERTICES => {
                Err(Error::NamingConventionOverflow(count))
            }
            _ => Ok(()),
        }
    }

    /// 下标 -> 顶点名称
    pub fn name(&self, index: usize) -> Result<VertexName> {
        match self {
            VertexNamingConvention::SequentialFromZero => Ok(VertexName::Number(index)),
            VertexNamingConvention::SequentialFromOne => Ok(VertexName::Number(index + 1)),
            VertexNamingConvention::LowercaseLetters => {
                if index >= MAX_LETTER_VERTICES {
                    return Err(Error::NamingConventionOverflow(index + 1));
                }
                Ok(VertexName::Letter((b'a' + index as u8) as char))
            }
        }
    }

    /// 按规则解析输入中的顶点记号
    pub fn parse(&self, token: &str) -> Result<VertexName> {
        match self {
            VertexNamingConvention::LowercaseLetters => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_lowercase() => Ok(VertexName::Letter(c)),
                    _ => Err(Error::ParseError(format!("无效的字母顶点: {}", token))),
                }
            }
            _ => token
                .parse::<usize>()
                .map(VertexName::Number)
                .map_err(|_| Error::ParseError(format!("无效的数字顶点: {}", token))),
        }
    }
}

impl std::str::FromStr for VertexNamingConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zero" | "sequential_from_zero" => Ok(VertexNamingConvention::SequentialFromZero),
            "one" | "sequential_from_one" => Ok(VertexNamingConvention::SequentialFromOne),
            "letters" | "lowercase_letters" => Ok(VertexNamingConvention::LowercaseLetters),
            _ => Err(Error::ParseError(format!("未知的命名规则: {}", s))),
        }
    }
}

/// 对外可见的顶点名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexName {
    Number(usize),
    Letter(char),
}

impl fmt::Display for VertexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexName::Number(n) => write!(f, "{}", n),
            VertexName::Letter(c) => write!(f, "{}", c),
        }
    }
}

/// 图配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// 是否有向
    pub directed: bool,
    /// 是否带权
    pub weighted: bool,
    /// 顶点命名规则
    pub naming: VertexNamingConvention,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    pub fn with_naming(mut self, naming: VertexNamingConvention) -> Self {
        self.naming = naming;
        self
    }

    pub fn undirected(&self) -> bool {
        !self.directed
    }

    /// 校验权重的有无与 `weighted` 一致
    pub fn check_weight(&self, weight: Option<Weight>) -> Result<()> {
        match (self.weighted, weight) {
            (true, None) => Err(Error::WeightRequired),
            (false, Some(_)) => Err(Error::WeightUnexpected),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_convention() {
        let zero = VertexNamingConvention::SequentialFromZero;
        let one = VertexNamingConvention::SequentialFromOne;
        let letters = VertexNamingConvention::LowercaseLetters;

        assert_eq!(zero.name(3).unwrap(), VertexName::Number(3));
        assert_eq!(one.name(3).unwrap(), VertexName::Number(4));
        assert_eq!(letters.name(0).unwrap(), VertexName::Letter('a'));
        assert_eq!(letters.name(25).unwrap(), VertexName::Letter('z'));
        assert!(matches!(
            letters.name(26),
            Err(Error::NamingConventionOverflow(27))
        ));
    }

    #[test]
    fn test_naming_capacity() {
        let letters = VertexNamingConvention::LowercaseLetters;
        assert!(letters.check_capacity(26).is_ok());
        assert!(matches!(
            letters.check_capacity(27),
            Err(Error::NamingConventionOverflow(27))
        ));
        assert!(VertexNamingConvention::SequentialFromOne
            .check_capacity(1000)
            .is_ok());
    }

    #[test]
    fn test_parse_tokens() {
        let letters = VertexNamingConvention::LowercaseLetters;
        assert_eq!(letters.parse("c").unwrap(), VertexName::Letter('c'));
        assert!(letters.parse("C").is_err());
        assert!(letters.parse("ab").is_err());

        let zero = VertexNamingConvention::SequentialFromZero;
        assert_eq!(zero.parse("12").unwrap(), VertexName::Number(12));
        assert!(zero.parse("-1").is_err());

        assert_eq!(
            "letters".parse::<VertexNamingConvention>().unwrap(),
            VertexNamingConvention::LowercaseLetters
        );
        assert!("roman".parse::<VertexNamingConvention>().is_err());
    }

    #[test]
    fn test_check_weight() {
        let weighted = GraphConfig::new().with_weighted(true);
        assert!(weighted.check_weight(Some(3)).is_ok());
        assert!(matches!(weighted.check_weight(None), Err(Error::WeightRequired)));

        let plain = GraphConfig::new();
        assert!(plain.check_weight(None).is_ok());
        assert!(matches!(plain.check_weight(Some(1)), Err(Error::WeightUnexpected)));
    }
}
