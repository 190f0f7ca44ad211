use std::{fmt::Display, str::FromStr};

use crate::errors::EoRasterError;

/// Element-wise arithmetic, evaluated in `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl ArithmeticOp {
    /// IEEE-754 semantics, division by zero gives `inf` or `nan`.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            ArithmeticOp::Add => lhs + rhs,
            ArithmeticOp::Sub => lhs - rhs,
            ArithmeticOp::Mul => lhs * rhs,
            ArithmeticOp::Div => lhs / rhs,
            ArithmeticOp::Pow => lhs.powf(rhs),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Sub => "-",
            ArithmeticOp::Mul => "*",
            ArithmeticOp::Div => "/",
            ArithmeticOp::Pow => "**",
        }
    }
}

impl FromStr for ArithmeticOp {
    type Err = EoRasterError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol.trim() {
            "+" => Ok(ArithmeticOp::Add),
            "-" => Ok(ArithmeticOp::Sub),
            "*" => Ok(ArithmeticOp::Mul),
            "/" => Ok(ArithmeticOp::Div),
            "**" | "^" => Ok(ArithmeticOp::Pow),
            other => Err(EoRasterError::UnsupportedOperator(other.into())),
        }
    }
}

impl Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Element-wise comparison, evaluated in `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl ComparisonOp {
    pub fn apply(self, lhs: f64, rhs: f64) -> bool {
        match self {
            ComparisonOp::Eq => lhs == rhs,
            ComparisonOp::Ne => lhs != rhs,
            ComparisonOp::Lt => lhs < rhs,
            ComparisonOp::Le => lhs <= rhs,
            ComparisonOp::Gt => lhs > rhs,
            ComparisonOp::Ge => lhs >= rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "==",
            ComparisonOp::Ne => "!=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Le => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Ge => ">=",
        }
    }
}

impl FromStr for ComparisonOp {
    type Err = EoRasterError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol.trim() {
            "==" => Ok(ComparisonOp::Eq),
            "!=" => Ok(ComparisonOp::Ne),
            "<" => Ok(ComparisonOp::Lt),
            "<=" => Ok(ComparisonOp::Le),
            ">" => Ok(ComparisonOp::Gt),
            ">=" => Ok(ComparisonOp::Ge),
            other => Err(EoRasterError::UnsupportedOperator(other.into())),
        }
    }
}

impl Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
