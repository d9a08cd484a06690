//! Font descriptor for measurement label rendering.

/// Font configuration for label text.
///
/// Describes which font the measurement labels use, including family name,
/// weight, and style. The descriptor is resolved to a Pango font description
/// at render time so live and committed labels always match.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace"); resolved against
    /// installed system fonts
    pub family: String,
    /// Font weight (e.g., "normal", "bold", or numeric 100-900)
    pub weight: String,
    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    /// Creates a font descriptor from its parts.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Converts this descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size", omitting "normal" parts.
    /// Example: "Sans 14" or "Monospace Italic Bold 12".
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", size.round() as i32));

        parts.join(" ")
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pango_string_omits_normal_parts() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(14.0), "Sans 14");
    }

    #[test]
    fn pango_string_includes_style_and_weight() {
        let font = FontDescriptor::new(
            "Monospace".to_string(),
            "bold".to_string(),
            "italic".to_string(),
        );
        assert_eq!(font.to_pango_string(12.0), "Monospace Italic Bold 12");
    }

    #[test]
    fn pango_string_rounds_fractional_sizes() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(13.6), "Sans 14");
    }
}
