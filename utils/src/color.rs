use serde_derive::*;

/// Linear RGB colour, channels in [0, 1].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0., g: 0., b: 0. };

    pub const fn new(r: f32, g: f32, b: f32) -> Rgb {
        Rgb { r, g, b }
    }

    /// Parses `#rrggbb`, `rrggbb` or the short `#rgb` form.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.trim().trim_start_matches('#');

        if !digits.is_ascii() {
            return None;
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| vec![c, c]).collect(),
            6 => digits.to_string(),
            _ => return None,
        };

        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.)
        };

        Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_black(&self) -> bool {
        self.r == 0. && self.g == 0. && self.b == 0.
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(c: [f32; 3]) -> Rgb {
        Rgb::new(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_and_short_hex() {
        let cyan = Rgb::from_hex("#00f3ff").unwrap();
        assert_eq!(cyan.r, 0.);
        assert!((cyan.g - 243. / 255.).abs() < 1e-6);
        assert_eq!(cyan.b, 1.);

        assert_eq!(Rgb::from_hex("fff"), Some(Rgb::new(1., 1., 1.)));
    }

    #[test]
    fn reject_malformed_hex() {
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }
}
