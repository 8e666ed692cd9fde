use starblaster_common::TextureId;

/// Image file bound to each texture slot, relative to the asset directory.
pub const TEXTURE_FILES: [(TextureId, &str); 9] = [
    (TextureId::Default, "white-texture.jpeg"),
    (TextureId::Size, "size-texture.png"),
    (TextureId::Speed, "speed-texture.png"),
    (TextureId::Color, "color-texture.png"),
    (TextureId::Planet1, "planet-texture.png"),
    (TextureId::Planet2, "planet-texture-2.png"),
    (TextureId::Planet3, "planet-texture-3.png"),
    (TextureId::Planet4, "planet-texture-4.png"),
    (TextureId::Ship, "spaceship-texture-5.jpg"),
];

pub fn texture_file(texture: TextureId) -> &'static str {
    TEXTURE_FILES
        .iter()
        .find(|(slot, _)| *slot == texture)
        .map_or(TEXTURE_FILES[0].1, |(_, file)| *file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_has_its_own_file() {
        let slots: std::collections::BTreeSet<_> = TEXTURE_FILES.iter().map(|(t, _)| *t).collect();
        assert_eq!(slots.len(), TEXTURE_FILES.len());
        assert_eq!(texture_file(TextureId::Default), "white-texture.jpeg");
        assert_eq!(texture_file(TextureId::Planet3), "planet-texture-3.png");
        assert_eq!(texture_file(TextureId::Ship), "spaceship-texture-5.jpg");
    }

    #[test]
    fn planet_variants_have_distinct_files() {
        let files: std::collections::BTreeSet<_> = TEXTURE_FILES
            .iter()
            .filter(|(t, _)| t.is_planet())
            .map(|(_, f)| *f)
            .collect();
        assert_eq!(files.len(), 4);
    }
}
