//! Text commands that create figures.
//!
//! Lines come from the console reader thread, one command per line:
//!
//! ```text
//! add rectangle 200 150 1 0 0 2 2 2 2
//! add circle 60 1 1 0 3
//! quit
//! ```

use crate::shapes::{
    Circle, Hexagon, Pentagon, Rectangle, Rgba, Shape, ShapeError, ShapeKind, Trapezoid, Triangle,
};
use std::str::FromStr;
use thiserror::Error;

/// One example line per shape type.
pub const USAGE_EXAMPLES: &[&str] = &[
    "add rectangle 200 150 1 0 0 2 2 2 2",
    "add triangle 100 0 1 0 3 3 3",
    "add trapezoid 80 120 100 0 0 1 2 2 2 2",
    "add circle 60 1 1 0 3",
    "add pentagon 70 0 1 0 2 2 2 2 2",
    "add hexagon 70 0 1 1 1 2 3 4 5 6",
];

/// Command parsing errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("unknown shape type: {0}")]
    UnknownShape(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid number for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Everything needed to build a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSpec {
    pub kind: ShapeKind,
    pub color: Rgba,
    pub thicknesses: Vec<f64>,
}

impl FigureSpec {
    /// Build the shape at the origin.
    pub fn build(self) -> Result<Shape, ShapeError> {
        Shape::new(self.kind, self.color, self.thicknesses)
    }
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(FigureSpec),
    Quit,
}

/// A command line that could not be applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Whitespace token reader with named fields for error messages.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            inner: line.split_whitespace(),
        }
    }

    fn word(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.inner.next().ok_or(ParseError::MissingValue(field))
    }

    fn number(&mut self, field: &'static str) -> Result<f64, ParseError> {
        let token = self.word(field)?;
        token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
            field,
            value: token.to_string(),
        })
    }

    fn color(&mut self) -> Result<Rgba, ParseError> {
        let r = self.number("red")?;
        let g = self.number("green")?;
        let b = self.number("blue")?;
        Ok(Rgba::from_unit(r, g, b))
    }

    fn thicknesses(&mut self, count: usize) -> Result<Vec<f64>, ParseError> {
        (0..count).map(|_| self.number("thickness")).collect()
    }
}

fn parse_figure(tokens: &mut Tokens<'_>) -> Result<FigureSpec, ParseError> {
    let type_name = tokens.word("shape type")?;
    let kind: ShapeKind = match type_name {
        "rectangle" => {
            let width = tokens.number("width")?;
            let height = tokens.number("height")?;
            Rectangle::new(width, height).into()
        }
        "triangle" => Triangle::new(tokens.number("side")?).into(),
        "trapezoid" => {
            let top = tokens.number("top base")?;
            let bottom = tokens.number("bottom base")?;
            let height = tokens.number("height")?;
            Trapezoid::new(top, bottom, height).into()
        }
        "circle" => Circle::new(tokens.number("radius")?).into(),
        "pentagon" => Pentagon::new(tokens.number("radius")?).into(),
        "hexagon" => Hexagon::new(tokens.number("radius")?).into(),
        other => return Err(ParseError::UnknownShape(other.to_string())),
    };
    let color = tokens.color()?;
    let thicknesses = tokens.thicknesses(kind.edge_count())?;

    Ok(FigureSpec {
        kind,
        color,
        thicknesses,
    })
}

impl FromStr for Command {
    type Err = ParseError;

    /// Parse one console line. Tokens after a complete command are ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(line);
        match tokens.inner.next() {
            None => Err(ParseError::Empty),
            Some("quit") => Ok(Command::Quit),
            Some("add") => parse_figure(&mut tokens).map(Command::Add),
            Some(other) => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ParseError> {
        line.parse()
    }

    #[test]
    fn test_usage_examples_parse_and_build() {
        for line in USAGE_EXAMPLES {
            let Ok(Command::Add(figure)) = parse(line) else {
                panic!("example should parse: {line}");
            };
            let shape = figure.build().unwrap();
            assert_eq!(shape.thicknesses().len(), shape.kind().edge_count());
        }
    }

    #[test]
    fn test_parse_rectangle() {
        let cmd = parse("add rectangle 200 150 1 0 0 2 2 2 2").unwrap();
        assert_eq!(
            cmd,
            Command::Add(FigureSpec {
                kind: ShapeKind::Rectangle(Rectangle::new(200.0, 150.0)),
                color: Rgba::red(),
                thicknesses: vec![2.0; 4],
            })
        );
    }

    #[test]
    fn test_parse_hexagon_thicknesses() {
        let Command::Add(figure) = parse("add hexagon 70 0 1 1 1 2 3 4 5 6").unwrap() else {
            panic!("expected add");
        };
        assert_eq!(figure.thicknesses, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(figure.color, Rgba::new(0, 255, 255, 255));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse("  quit  ").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(
            parse("remove"),
            Err(ParseError::UnknownCommand("remove".to_string()))
        );
        assert_eq!(
            parse("add star 5"),
            Err(ParseError::UnknownShape("star".to_string()))
        );
        assert_eq!(
            parse("add circle 60 1 1 0"),
            Err(ParseError::MissingValue("thickness"))
        );
        assert_eq!(parse("add"), Err(ParseError::MissingValue("shape type")));
        assert_eq!(
            parse("add triangle abc 0 1 0 3 3 3"),
            Err(ParseError::InvalidNumber {
                field: "side",
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        assert!(matches!(
            parse("add circle 60 1 1 0 3 extra"),
            Ok(Command::Add(_))
        ));
    }

    #[test]
    fn test_build_rejects_negative_dimension() {
        let Command::Add(figure) = parse("add circle -5 1 1 0 3").unwrap() else {
            panic!("expected add");
        };
        assert!(matches!(
            figure.build(),
            Err(ShapeError::InvalidDimension { name: "radius", .. })
        ));
    }
}
