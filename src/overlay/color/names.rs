//! Nearest named color lookup over the extended web color table

use crate::overlay::color::conversions::{Lab, delta_e2000, rgb_l1_distance, srgb_to_lab};
use crate::overlay::frame::Rgba8;

/// A named reference color. `class_name` is the broad hue family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    pub class_name: &'static str,
    pub color_name: &'static str,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorEntry {
    const fn new(class_name: &'static str, color_name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { class_name, color_name, r, g, b }
    }

    pub fn rgba(&self) -> Rgba8 {
        Rgba8::opaque(self.r, self.g, self.b)
    }
}

/// Metric used to rank the table entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorDistance {
    /// Mean absolute sRGB difference. Cheap.
    RgbL1,
    /// CIEDE2000 in L*a*b*. Much more expensive, perceptually better.
    #[default]
    Cie2000,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatch {
    pub entry: &'static ColorEntry,
    pub distance: f64,
}

/// Extended web colors (HTML 4.01, CSS 2.0, SVG 1.0 and CSS3 UI), with the
/// Fuchsia/Magenta duplicate removed.
pub static COLOR_TABLE: &[ColorEntry] = &[
    ColorEntry::new("Pink", "Pink", 255, 192, 203),
    ColorEntry::new("Pink", "LightPink", 255, 182, 193),
    ColorEntry::new("Pink", "HotPink", 255, 105, 180),
    ColorEntry::new("Pink", "DeepPink", 255, 20, 147),
    ColorEntry::new("Pink", "PaleVioletRed", 219, 112, 147),
    ColorEntry::new("Pink", "MediumVioletRed", 199, 21, 133),
    ColorEntry::new("Red", "LightSalmon", 255, 160, 122),
    ColorEntry::new("Red", "Salmon", 250, 128, 114),
    ColorEntry::new("Red", "DarkSalmon", 233, 150, 122),
    ColorEntry::new("Red", "LightCoral", 240, 128, 128),
    ColorEntry::new("Red", "IndianRed", 205, 92, 92),
    ColorEntry::new("Red", "Crimson", 220, 20, 60),
    ColorEntry::new("Red", "Firebrick", 178, 34, 34),
    ColorEntry::new("Red", "DarkRed", 139, 0, 0),
    ColorEntry::new("Red", "Red", 255, 0, 0),
    ColorEntry::new("Orange", "OrangeRed", 255, 69, 0),
    ColorEntry::new("Orange", "Tomato", 255, 99, 71),
    ColorEntry::new("Orange", "Coral", 255, 127, 80),
    ColorEntry::new("Orange", "DarkOrange", 255, 140, 0),
    ColorEntry::new("Orange", "Orange", 255, 165, 0),
    ColorEntry::new("Yellow", "Yellow", 255, 255, 0),
    ColorEntry::new("Yellow", "LightYellow", 255, 255, 224),
    ColorEntry::new("Yellow", "LemonChiffon", 255, 250, 205),
    ColorEntry::new("Yellow", "LightGoldenrodYellow", 250, 250, 210),
    ColorEntry::new("Yellow", "PapayaWhip", 255, 239, 213),
    ColorEntry::new("Yellow", "Moccasin", 255, 228, 181),
    ColorEntry::new("Yellow", "PeachPuff", 255, 218, 185),
    ColorEntry::new("Yellow", "PaleGoldenrod", 238, 232, 170),
    ColorEntry::new("Yellow", "Khaki", 240, 230, 140),
    ColorEntry::new("Yellow", "DarkKhaki", 189, 183, 107),
    ColorEntry::new("Yellow", "Gold", 255, 215, 0),
    ColorEntry::new("Brown", "Cornsilk", 255, 248, 220),
    ColorEntry::new("Brown", "BlanchedAlmond", 255, 235, 205),
    ColorEntry::new("Brown", "Bisque", 255, 228, 196),
    ColorEntry::new("Brown", "NavajoWhite", 255, 222, 173),
    ColorEntry::new("Brown", "Wheat", 245, 222, 179),
    ColorEntry::new("Brown", "Burlywood", 222, 184, 135),
    ColorEntry::new("Brown", "Tan", 210, 180, 140),
    ColorEntry::new("Brown", "RosyBrown", 188, 143, 143),
    ColorEntry::new("Brown", "SandyBrown", 244, 164, 96),
    ColorEntry::new("Brown", "Goldenrod", 218, 165, 32),
    ColorEntry::new("Brown", "DarkGoldenrod", 184, 134, 11),
    ColorEntry::new("Brown", "Peru", 205, 133, 63),
    ColorEntry::new("Brown", "Chocolate", 210, 105, 30),
    ColorEntry::new("Brown", "SaddleBrown", 139, 69, 19),
    ColorEntry::new("Brown", "Sienna", 160, 82, 45),
    ColorEntry::new("Brown", "Brown", 165, 42, 42),
    ColorEntry::new("Brown", "Maroon", 128, 0, 0),
    ColorEntry::new("Green", "DarkOliveGreen", 85, 107, 47),
    ColorEntry::new("Green", "Olive", 128, 128, 0),
    ColorEntry::new("Green", "OliveDrab", 107, 142, 35),
    ColorEntry::new("Green", "YellowGreen", 154, 205, 50),
    ColorEntry::new("Green", "LimeGreen", 50, 205, 50),
    ColorEntry::new("Green", "Lime", 0, 255, 0),
    ColorEntry::new("Green", "LawnGreen", 124, 252, 0),
    ColorEntry::new("Green", "Chartreuse", 127, 255, 0),
    ColorEntry::new("Green", "GreenYellow", 173, 255, 47),
    ColorEntry::new("Green", "SpringGreen", 0, 255, 127),
    ColorEntry::new("Green", "MediumSpringGreen", 0, 250, 154),
    ColorEntry::new("Green", "LightGreen", 144, 238, 144),
    ColorEntry::new("Green", "PaleGreen", 152, 251, 152),
    ColorEntry::new("Green", "DarkSeaGreen", 143, 188, 143),
    ColorEntry::new("Green", "MediumAquamarine", 102, 205, 170),
    ColorEntry::new("Green", "MediumSeaGreen", 60, 179, 113),
    ColorEntry::new("Green", "SeaGreen", 46, 139, 87),
    ColorEntry::new("Green", "ForestGreen", 34, 139, 34),
    ColorEntry::new("Green", "Green", 0, 128, 0),
    ColorEntry::new("Green", "DarkGreen", 0, 100, 0),
    ColorEntry::new("Cyan", "Aqua", 0, 255, 255),
    ColorEntry::new("Cyan", "Cyan", 0, 255, 255),
    ColorEntry::new("Cyan", "LightCyan", 224, 255, 255),
    ColorEntry::new("Cyan", "PaleTurquoise", 175, 238, 238),
    ColorEntry::new("Cyan", "Aquamarine", 127, 255, 212),
    ColorEntry::new("Cyan", "Turquoise", 64, 224, 208),
    ColorEntry::new("Cyan", "MediumTurquoise", 72, 209, 204),
    ColorEntry::new("Cyan", "DarkTurquoise", 0, 206, 209),
    ColorEntry::new("Cyan", "LightSeaGreen", 32, 178, 170),
    ColorEntry::new("Cyan", "CadetBlue", 95, 158, 160),
    ColorEntry::new("Cyan", "DarkCyan", 0, 139, 139),
    ColorEntry::new("Cyan", "Teal", 0, 128, 128),
    ColorEntry::new("Blue", "LightSteelBlue", 176, 196, 222),
    ColorEntry::new("Blue", "PowderBlue", 176, 224, 230),
    ColorEntry::new("Blue", "LightBlue", 173, 216, 230),
    ColorEntry::new("Blue", "SkyBlue", 135, 206, 235),
    ColorEntry::new("Blue", "LightSkyBlue", 135, 206, 250),
    ColorEntry::new("Blue", "DeepSkyBlue", 0, 191, 255),
    ColorEntry::new("Blue", "DodgerBlue", 30, 144, 255),
    ColorEntry::new("Blue", "CornflowerBlue", 100, 149, 237),
    ColorEntry::new("Blue", "SteelBlue", 70, 130, 180),
    ColorEntry::new("Blue", "RoyalBlue", 65, 105, 225),
    ColorEntry::new("Blue", "Blue", 0, 0, 255),
    ColorEntry::new("Blue", "MediumBlue", 0, 0, 205),
    ColorEntry::new("Blue", "DarkBlue", 0, 0, 139),
    ColorEntry::new("Blue", "Navy", 0, 0, 128),
    ColorEntry::new("Blue", "MidnightBlue", 25, 25, 112),
    ColorEntry::new("Violet", "Lavender", 230, 230, 250),
    ColorEntry::new("Violet", "Thistle", 216, 191, 216),
    ColorEntry::new("Violet", "Plum", 221, 160, 221),
    ColorEntry::new("Violet", "Violet", 238, 130, 238),
    ColorEntry::new("Violet", "Orchid", 218, 112, 214),
    ColorEntry::new("Violet", "Magenta", 255, 0, 255),
    ColorEntry::new("Violet", "MediumOrchid", 186, 85, 211),
    ColorEntry::new("Violet", "MediumPurple", 147, 112, 219),
    ColorEntry::new("Violet", "BlueViolet", 138, 43, 226),
    ColorEntry::new("Violet", "DarkViolet", 148, 0, 211),
    ColorEntry::new("Violet", "DarkOrchid", 153, 50, 204),
    ColorEntry::new("Violet", "DarkMagenta", 139, 0, 139),
    ColorEntry::new("Violet", "Purple", 128, 0, 128),
    ColorEntry::new("Violet", "Indigo", 75, 0, 130),
    ColorEntry::new("Violet", "DarkSlateBlue", 72, 61, 139),
    ColorEntry::new("Violet", "SlateBlue", 106, 90, 205),
    ColorEntry::new("Violet", "MediumSlateBlue", 123, 104, 238),
    ColorEntry::new("White", "White", 255, 255, 255),
    ColorEntry::new("White", "Snow", 255, 250, 250),
    ColorEntry::new("White", "Honeydew", 240, 255, 240),
    ColorEntry::new("White", "MintCream", 245, 255, 250),
    ColorEntry::new("White", "Azure", 240, 255, 255),
    ColorEntry::new("White", "AliceBlue", 240, 248, 255),
    ColorEntry::new("White", "GhostWhite", 248, 248, 255),
    ColorEntry::new("White", "WhiteSmoke", 245, 245, 245),
    ColorEntry::new("White", "Seashell", 255, 245, 238),
    ColorEntry::new("White", "Beige", 245, 245, 220),
    ColorEntry::new("White", "OldLace", 253, 245, 230),
    ColorEntry::new("White", "FloralWhite", 255, 250, 240),
    ColorEntry::new("White", "Ivory", 255, 255, 240),
    ColorEntry::new("White", "AntiqueWhite", 250, 235, 215),
    ColorEntry::new("White", "Linen", 250, 240, 230),
    ColorEntry::new("White", "LavenderBlush", 255, 240, 245),
    ColorEntry::new("White", "MistyRose", 255, 228, 225),
    ColorEntry::new("Gray", "Gainsboro", 220, 220, 220),
    ColorEntry::new("Gray", "LightGray", 211, 211, 211),
    ColorEntry::new("Gray", "Silver", 192, 192, 192),
    ColorEntry::new("Gray", "DarkGray", 169, 169, 169),
    ColorEntry::new("Gray", "Gray", 128, 128, 128),
    ColorEntry::new("Gray", "DimGray", 105, 105, 105),
    ColorEntry::new("Gray", "LightSlateGray", 119, 136, 153),
    ColorEntry::new("Gray", "SlateGray", 112, 128, 144),
    ColorEntry::new("Gray", "DarkSlateGray", 47, 79, 79),
    ColorEntry::new("Gray", "Black", 0, 0, 0),
];

/// The two table entries closest to `px`; index 0 is the closest.
pub fn closest_colors(px: Rgba8, distance: ColorDistance) -> [ColorMatch; 2] {
    let target_lab = srgb_to_lab(px);
    let distance_to = |entry: &ColorEntry| -> f64 {
        match distance {
            ColorDistance::RgbL1 => rgb_l1_distance(px, entry.rgba()),
            ColorDistance::Cie2000 => delta_e2000(&target_lab, &lab_of(entry)),
        }
    };

    let mut best = ColorMatch { entry: &COLOR_TABLE[0], distance: f64::MAX };
    let mut second = best;

    for entry in COLOR_TABLE {
        let d = distance_to(entry);
        if d < best.distance {
            second = best;
            best = ColorMatch { entry, distance: d };
        } else if d < second.distance {
            second = ColorMatch { entry, distance: d };
        }
    }

    [best, second]
}

fn lab_of(entry: &ColorEntry) -> Lab {
    srgb_to_lab(entry.rgba())
}
