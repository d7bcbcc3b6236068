use nom::{
    bytes::complete::take_while1,
    combinator::{map_res, opt},
    multi::many0,
    number::complete::recognize_float,
    sequence::preceded,
    IResult, Parser,
};

use crate::error::TrainingError;
use crate::models::{RawValue, WorkoutPackage};

/// Parse sensor packages, one per line: `CODE v1 v2 ...`.
///
/// Values are separated by whitespace and/or commas. `#` starts a comment
/// that runs to the end of the line; blank lines are skipped. A value
/// containing `.` or an exponent is a real, anything else an integer.
/// Workout codes are not validated here.
#[uniffi::export]
pub fn parse_packages(text: &str) -> Result<Vec<WorkoutPackage>, TrainingError> {
    let mut packages = Vec::new();
    for (index, raw_line) in text.lines().enumerate() {
        let line_no = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }
        packages.push(parse_line(line, line_no)?);
    }
    Ok(packages)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_line(line: &str, line_no: u32) -> Result<WorkoutPackage, TrainingError> {
    match package_line(line) {
        Ok((remaining, (code, data))) => {
            if remaining.is_empty() {
                Ok(WorkoutPackage::new(code, data))
            } else {
                Err(TrainingError::Parse {
                    line: line_no,
                    message: format!(
                        "invalid value at column {}: '{}'",
                        line.len() - remaining.len() + 1,
                        remaining
                    ),
                })
            }
        }
        Err(_) => Err(TrainingError::Parse {
            line: line_no,
            message: format!("expected a workout code, found '{}'", line),
        }),
    }
}

fn package_line(input: &str) -> IResult<&str, (&str, Vec<RawValue>)> {
    let (input, code) = workout_code(input)?;
    let (input, data) = many0(preceded(separator, raw_value)).parse(input)?;
    let (input, _) = opt(separator).parse(input)?;
    Ok((input, (code, data)))
}

fn workout_code(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_').parse(input)
}

fn separator(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_whitespace() || c == ',').parse(input)
}

fn raw_value(input: &str) -> IResult<&str, RawValue> {
    map_res(recognize_float, classify_number).parse(input)
}

fn classify_number(token: &str) -> Result<RawValue, String> {
    if token.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
        let value: f64 = token.parse().map_err(|e| format!("{e}"))?;
        if value.is_finite() {
            Ok(RawValue::real(value))
        } else {
            Err(format!("value out of range: {token}"))
        }
    } else {
        token
            .parse::<i64>()
            .map(RawValue::int)
            .map_err(|e| format!("{e}"))
    }
}
