//! Couleur moyenne d'une couverture, pour le halo lumineux.
//!
//! L'image est réduite à un échantillon 40×40, les pixels quasi
//! transparents sont ignorés, puis la moyenne RGB est rehaussée en
//! saturation et en luminosité via un aller-retour HSL. Sans pixel
//! opaque exploitable on retombe sur un gris neutre.

use image::DynamicImage;
use image::imageops::FilterType;

/// Côté de l'échantillon de pixels.
const SAMPLE_SIZE: u32 = 40;

/// Seuil d'alpha en dessous duquel un pixel est ignoré.
const ALPHA_THRESHOLD: u8 = 10;

/// Couleur de repli quand aucun pixel n'est exploitable.
pub const FALLBACK_GRAY: Rgb = Rgb {
    r: 128,
    g: 128,
    b: 128,
};

/// Facteur de rehaussement de la saturation.
const SATURATION_BOOST: f64 = 1.25;

/// Facteur de rehaussement de la luminosité.
const LIGHTNESS_BOOST: f64 = 1.05;

/// Couleur RGB 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Représentation CSS `rgb(r, g, b)`.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Couleur HSL, composantes dans [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Conversion RGB → HSL (composantes HSL dans [0, 1]).
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatique
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } / 6.0;

    Hsl { h, s, l }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Conversion HSL → RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Rgb { r: v, g: v, b: v };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: (hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        g: (hue_to_rgb(p, q, h) * 255.0).round() as u8,
        b: (hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    }
}

/// Rehausse une couleur : saturation ×1.25 et luminosité ×1.05, les deux
/// bornées à 1.
pub fn boost(rgb: Rgb) -> Rgb {
    let mut hsl = rgb_to_hsl(rgb);
    hsl.s = (hsl.s * SATURATION_BOOST).min(1.0);
    hsl.l = (hsl.l * LIGHTNESS_BOOST).min(1.0);
    hsl_to_rgb(hsl)
}

/// Couleur moyenne rehaussée d'une image.
///
/// L'image est réduite à 40×40, les pixels d'alpha < 10 sont ignorés ;
/// sans aucun pixel opaque le résultat est [`FALLBACK_GRAY`] tel quel.
pub fn average_color(img: &DynamicImage) -> Rgb {
    let sample = img
        .resize_exact(SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Triangle)
        .to_rgba8();

    let mut r: u64 = 0;
    let mut g: u64 = 0;
    let mut b: u64 = 0;
    let mut count: u64 = 0;

    for pixel in sample.pixels() {
        if pixel[3] < ALPHA_THRESHOLD {
            continue;
        }
        r += pixel[0] as u64;
        g += pixel[1] as u64;
        b += pixel[2] as u64;
        count += 1;
    }

    if count == 0 {
        return FALLBACK_GRAY;
    }

    boost(Rgb {
        r: (r / count) as u8,
        g: (g / count) as u8,
        b: (b / count) as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid(color: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 64, color))
    }

    #[test]
    fn transparent_image_yields_neutral_gray() {
        let img = solid(Rgba([200, 10, 10, 0]));
        assert_eq!(average_color(&img), FALLBACK_GRAY);
    }

    #[test]
    fn solid_color_image_yields_boosted_color() {
        let color = Rgb {
            r: 200,
            g: 30,
            b: 30,
        };
        let img = solid(Rgba([color.r, color.g, color.b, 255]));
        assert_eq!(average_color(&img), boost(color));
    }

    #[test]
    fn boost_keeps_gray_achromatic() {
        let boosted = boost(Rgb {
            r: 100,
            g: 100,
            b: 100,
        });
        assert_eq!(boosted.r, boosted.g);
        assert_eq!(boosted.g, boosted.b);
        // Seule la luminosité bouge (×1.05).
        assert_eq!(boosted.r, 105);
    }

    #[test]
    fn boost_saturates_without_changing_hue_family() {
        let boosted = boost(Rgb { r: 180, g: 60, b: 60 });
        // Le rouge reste dominant.
        assert!(boosted.r > boosted.g);
        assert!(boosted.r > boosted.b);
    }

    #[test]
    fn hsl_roundtrip_is_stable_within_rounding() {
        for rgb in [
            Rgb { r: 0, g: 0, b: 0 },
            Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
            Rgb { r: 37, g: 142, b: 9 },
            Rgb {
                r: 200,
                g: 30,
                b: 180,
            },
        ] {
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            assert!((back.r as i32 - rgb.r as i32).abs() <= 1);
            assert!((back.g as i32 - rgb.g as i32).abs() <= 1);
            assert!((back.b as i32 - rgb.b as i32).abs() <= 1);
        }
    }

    #[test]
    fn mostly_transparent_image_averages_opaque_pixels_only() {
        let mut img = RgbaImage::from_pixel(40, 40, Rgba([0, 0, 255, 0]));
        for y in 0..20 {
            for x in 0..40 {
                img.put_pixel(x, y, Rgba([250, 250, 250, 255]));
            }
        }
        let avg = average_color(&DynamicImage::ImageRgba8(img));
        // Le bleu transparent ne pèse pas : la moyenne reste claire.
        assert!(avg.r > 200 && avg.g > 200);
    }
}
