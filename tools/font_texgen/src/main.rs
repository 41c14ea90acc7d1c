//! Font atlas texture generator
//!
//! Usage: `font_texgen <FONT>`. Writes `assets/images/font.png`.

use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

use glyph_atlas::foundation::logging;
use glyph_atlas::prelude::*;

fn main() -> Result<()> {
    let matches = Command::new("font_texgen")
        .about("Generates the fixed-grid font atlas texture used by the text renderer")
        .arg(
            Arg::new("font")
                .value_name("FONT")
                .help("Path to a TrueType/OpenType font file")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    logging::init();

    let font_path = matches
        .get_one::<PathBuf>("font")
        .ok_or_else(|| anyhow!("missing font path"))?;

    let generator = AtlasGenerator::new(AtlasConfig::default())
        .context("Invalid atlas configuration")?;

    let atlas = generator
        .generate_from_file(font_path)
        .with_context(|| format!("Failed to build atlas from {:?}", font_path))?;

    let measured = atlas.search.measured;
    println!("({}, {}) {}", measured.width, measured.height, atlas.font_size());

    generator
        .write(&atlas)
        .with_context(|| format!("Failed to write {:?}", generator.config().output_path))?;

    Ok(())
}
