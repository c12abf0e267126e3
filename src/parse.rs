use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt},
    sequence::{preceded, separated_pair, tuple},
    IResult,
};

use crate::{color::Color, error::Error};

fn hex_channel(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |digits| u8::from_str_radix(digits, 16),
    )(input)
}

fn hex_color(input: &str) -> IResult<&str, Color> {
    map(
        preceded(
            opt(char('#')),
            tuple((hex_channel, hex_channel, hex_channel)),
        ),
        |(red, green, blue)| Color::new(red, green, blue),
    )(input)
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |digits: &str| digits.parse::<u32>())(input)
}

fn pair(input: &str) -> IResult<&str, (u32, u32)> {
    separated_pair(number, one_of("xX"), number)(input)
}

fn complete<'a, O>(
    parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
    token: &'a str,
    expected: &'static str,
) -> Result<O, Error> {
    all_consuming(parser)(token)
        .map(|(_, output)| output)
        .map_err(|_| Error::MalformedToken {
            expected,
            token: token.to_owned(),
        })
}

/// `#rrggbb` or `rrggbb`, case-insensitive.
pub fn color(token: &str) -> Result<Color, Error> {
    complete(hex_color, token, "6-digit hex color")
}

pub fn dims(token: &str) -> Result<(u32, u32), Error> {
    complete(pair, token, "WxH")
}

pub fn cell_pos(token: &str) -> Result<(u32, u32), Error> {
    complete(pair, token, "CxR")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors() {
        assert_eq!(color("ffffff").unwrap(), Color::new(255, 255, 255));
        assert_eq!(color("#f97316").unwrap(), Color::new(0xf9, 0x73, 0x16));
        assert_eq!(color("#AaBbCc").unwrap(), Color::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn rejects_bad_colors() {
        for token in ["", "#", "fffff", "fffffff", "##ffffff", "gg0000", " ffffff"] {
            let err = color(token).unwrap_err();
            assert!(
                matches!(err, Error::MalformedToken { token: ref t, .. } if t == token),
                "{token:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn dimensions() {
        assert_eq!(dims("1200x630").unwrap(), (1200, 630));
        assert_eq!(dims("16X16").unwrap(), (16, 16));
        assert_eq!(dims("0x5").unwrap(), (0, 5));
    }

    #[test]
    fn rejects_bad_dimensions() {
        let tokens = ["1200", "1200x", "x630", "12x34x56", "-1x5", "axb"];
        for token in tokens {
            assert!(dims(token).is_err(), "{token:?} parsed");
        }
        assert!(dims("99999999999x1").is_err());
    }

    #[test]
    fn cell_positions() {
        assert_eq!(cell_pos("7x3").unwrap(), (7, 3));
        assert_eq!(cell_pos("0x0").unwrap(), (0, 0));
        let err = cell_pos("7,3").unwrap_err();
        assert_eq!(err.to_string(), "expected CxR, got '7,3'");
    }
}
