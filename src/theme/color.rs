use ratatui::style::Color;

/// Best-effort translation of a CSS-ish color value into a terminal color.
///
/// Handles `#rgb`/`#rrggbb` hex, `rgb()`/`rgba()` functional notation (alpha
/// is dropped; terminals have no compositing), a small set of color names,
/// and gradient expressions, which resolve to their first parseable stop.
/// Anything else is `None` and the widget keeps its terminal default.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    if value.starts_with("rgb(") || value.starts_with("rgba(") {
        return parse_rgb_call(value);
    }
    if value.starts_with("linear-gradient(") || value.starts_with("radial-gradient(") {
        return first_gradient_stop(value);
    }

    match value.to_ascii_lowercase().as_str() {
        "white" => Some(Color::Rgb(255, 255, 255)),
        "whitesmoke" => Some(Color::Rgb(245, 245, 245)),
        "black" => Some(Color::Rgb(0, 0, 0)),
        "gray" | "grey" => Some(Color::Rgb(128, 128, 128)),
        "red" => Some(Color::Rgb(255, 0, 0)),
        "green" => Some(Color::Rgb(0, 128, 0)),
        "blue" => Some(Color::Rgb(0, 0, 255)),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        // #abc expands to #aabbcc
        3 => {
            let mut ch = hex.chars();
            let r = hex_nibble(ch.next()?)?;
            let g = hex_nibble(ch.next()?)?;
            let b = hex_nibble(ch.next()?)?;
            Some(Color::Rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

fn hex_nibble(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

fn parse_rgb_call(value: &str) -> Option<Color> {
    let inner = value
        .split_once('(')?
        .1
        .strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r = parse_channel(parts.next()?)?;
    let g = parse_channel(parts.next()?)?;
    let b = parse_channel(parts.next()?)?;
    Some(Color::Rgb(r, g, b))
}

fn parse_channel(s: &str) -> Option<u8> {
    // Channels are usually integers but floats are legal CSS.
    s.parse::<u8>()
        .ok()
        .or_else(|| s.parse::<f32>().ok().map(|f| f.clamp(0.0, 255.0) as u8))
}

fn first_gradient_stop(value: &str) -> Option<Color> {
    let mut rest = value;
    while let Some(pos) = rest.find('#') {
        let hex: String = rest[pos + 1..]
            .chars()
            .take_while(char::is_ascii_hexdigit)
            .collect();
        if let Some(color) = parse_hex(&hex) {
            return Some(color);
        }
        rest = &rest[pos + 1..];
    }
    None
}
