//! Provides what's needed to generate sublev's man page
use std::io::Write;

use clap::CommandFactory;
use clap_mangen::Man;
use color_eyre::eyre::Result;
use roff::{Inline, Roff};

use crate::SublevOptions;

const DISTANCE_SECTION: &str = "
The distance between the query and an item is the smallest number of single byte
insertions, deletions and substitutions turning the query into some contiguous
substring of the item. The substring may start and end anywhere in the item, but the
whole query has to be used.
Example: `kitten` is at distance 1 of `xxkitxenyy` (through `kitxen`).
";

const LIMITS_SECTION: &str = "
Only the first 1024 bytes of the query and of each item are compared. Longer inputs
behave exactly like their first 1024 bytes.

An empty query is charged the whole length of the item: it matches the items that
are at most `--max-distance` bytes long.
";

const EXIT_CODES_SECTION: &str = "
* 0: success
* 1: no match
* 2: error
";

fn parse_str(src: &str) -> Vec<Inline> {
    let mut res = Vec::new();
    for line in src.lines() {
        res.push(Inline::Roman(line.to_string()));
        res.push(Inline::LineBreak);
    }
    res
}

fn section(c: &mut Roff, name: &str, content: &str) {
    c.control("SH", [name]);
    c.text(parse_str(content));
}

/// Generate sublev's manpage and write it to the writer
pub fn generate<W>(w: &mut W) -> Result<()>
where
    W: Write,
{
    let base = Man::new(SublevOptions::command());
    let mut custom = Roff::default();

    base.render_title(w)?;
    base.render_name_section(w)?;
    base.render_synopsis_section(w)?;
    base.render_options_section(w)?;

    section(&mut custom, "DISTANCE", DISTANCE_SECTION);
    section(&mut custom, "LIMITS", LIMITS_SECTION);
    section(&mut custom, "ENVIRONMENT VARIABLES", "");
    custom.control("SS", ["SUBLEV_DEFAULT_OPTIONS"]);
    custom.text(parse_str(
        "Will be parsed and used as default options. Example: `--max-distance 2 --case smart`",
    ));
    section(&mut custom, "EXIT CODES", EXIT_CODES_SECTION);

    custom.to_writer(w)?;

    base.render_version_section(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_custom_sections() {
        let mut out = Vec::new();
        generate(&mut out).unwrap();
        let page = String::from_utf8(out).unwrap();
        assert!(page.contains("DISTANCE"));
        assert!(page.contains("SUBLEV_DEFAULT_OPTIONS"));
        assert!(page.contains("EXIT CODES"));
    }
}
