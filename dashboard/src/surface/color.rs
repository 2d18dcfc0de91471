// Theme color strings to backend colors.
use plotters_backend::BackendColor;

/// Accepts `#rgb`, `#rrggbb`, `rgb(r,g,b)` and `rgba(r,g,b,a)`.
pub fn parse_css_color(raw: &str) -> Option<BackendColor> {
    let s = raw.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).map(|rgb| BackendColor { alpha: 1.0, rgb });
    }
    let lower = s.to_ascii_lowercase();
    let (args, has_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else if let Some(rest) = lower.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, false)
    } else {
        return None;
    };

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != if has_alpha { 4 } else { 3 } {
        return None;
    }
    let channel = |p: &str| p.parse::<u8>().ok();
    let rgb = (channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    let alpha = if has_alpha {
        let a = parts[3].parse::<f64>().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        a
    } else {
        1.0
    };
    Some(BackendColor { alpha, rgb })
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(raw: &str) -> Option<((u8, u8, u8), f64)> {
        parse_css_color(raw).map(|c| (c.rgb, c.alpha))
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(rgba("#2f81f7"), Some(((0x2f, 0x81, 0xf7), 1.0)));
        assert_eq!(rgba("#FFD166"), Some(((0xff, 0xd1, 0x66), 1.0)));
        assert_eq!(rgba("#fff"), Some(((255, 255, 255), 1.0)));
    }

    #[test]
    fn test_rgb_functions() {
        assert_eq!(rgba("rgba(255,255,255,0.08)"), Some(((255, 255, 255), 0.08)));
        assert_eq!(rgba("rgb( 10, 20, 30 )"), Some(((10, 20, 30), 1.0)));
    }

    #[test]
    fn test_rejects_unsupported_colors() {
        assert_eq!(rgba("red"), None);
        assert_eq!(rgba("#12345"), None);
        assert_eq!(rgba("#gggggg"), None);
        assert_eq!(rgba("rgba(1,2,3)"), None);
        assert_eq!(rgba("rgb(256,0,0)"), None);
        assert_eq!(rgba("rgba(1,2,3,1.5)"), None);
    }
}
