//! Display color tags assigned to new courses and notes.

/// Opaque display tags, cycled in order.
pub const PASTEL_PALETTE: [&str; 8] = [
    "bg-pastel-pink",
    "bg-pastel-blue",
    "bg-pastel-green",
    "bg-pastel-yellow",
    "bg-pastel-purple",
    "bg-pastel-orange",
    "bg-pastel-cyan",
    "bg-pastel-rose",
];

/// Picks the palette entry for a collection that currently holds `count` items.
pub fn palette_color(count: usize) -> &'static str {
    PASTEL_PALETTE[count % PASTEL_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::{palette_color, PASTEL_PALETTE};

    #[test]
    fn palette_wraps_around() {
        assert_eq!(palette_color(0), PASTEL_PALETTE[0]);
        assert_eq!(palette_color(7), PASTEL_PALETTE[7]);
        assert_eq!(palette_color(8), PASTEL_PALETTE[0]);
        assert_eq!(palette_color(19), PASTEL_PALETTE[3]);
    }
}
