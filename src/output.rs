//! Ranks the matches and writes them out.

use std::io::Write;

use crate::engine::{Engine, MatchResult};
use crate::options::SublevOptions;
use crate::reader::Item;

/// Matches every item and pairs each match with its item, best distance first unless
/// `no_sort`.
///
/// Ties keep the input order.
pub fn collect_matches<'a>(engine: &Engine, items: &'a [Item], no_sort: bool) -> Vec<(&'a Item, MatchResult)> {
    let mut results: Vec<_> = items
        .iter()
        .filter_map(|item| Some((item, engine.match_item(item.index, &item.text)?)))
        .collect();
    if !no_sort {
        results.sort_by_key(|(_, result)| result.distance);
    }
    debug!("{} of {} items matched {}", results.len(), items.len(), engine);
    results
}

/// Writes the matched items, one record each.
pub fn write_matches<W: Write>(
    out: &mut W,
    results: &[(&Item, MatchResult)],
    options: &SublevOptions,
) -> std::io::Result<()> {
    let ending = options.output_ending();
    for (item, result) in results {
        if options.print_distance {
            write!(out, "{}\t", result.distance)?;
        }
        out.write_all(&item.text)?;
        out.write_all(ending.as_bytes())?;
    }
    out.flush()
}

/// Matches `items` with the engine described by `options` and writes the matches.
///
/// Returns the number of matched items.
pub fn filter<W: Write>(out: &mut W, items: &[Item], options: &SublevOptions) -> crate::Result<usize> {
    let engine = options.engine();
    let results = collect_matches(&engine, items, options.no_sort);
    write_matches(out, &results, options)?;
    Ok(results.len())
}

/// Matches `text` as a single item and writes its distance, if any.
///
/// Returns whether the text matched.
pub fn whole<W: Write>(out: &mut W, text: &[u8], options: &SublevOptions) -> crate::Result<bool> {
    let Some(distance) = options.engine().distance(text) else {
        return Ok(false);
    };
    write!(out, "{}{}", distance, options.output_ending())?;
    out.flush()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SublevOptionsBuilder;

    fn items(lines: &[&str]) -> Vec<Item> {
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| Item {
                index,
                text: line.as_bytes().to_vec(),
            })
            .collect()
    }

    fn run(lines: &[&str], builder: &mut SublevOptionsBuilder) -> (usize, String) {
        let options = builder.build().unwrap();
        let mut out = Vec::new();
        let n = filter(&mut out, &items(lines), &options).unwrap();
        (n, String::from_utf8(out).unwrap())
    }

    #[test]
    fn sorted_by_distance_then_input_order() {
        let (n, out) = run(
            &["a mitten", "the kitten", "kitchen", "dog", "kittens"],
            SublevOptionsBuilder::default().query("kitten").max_distance(2).print_distance(true),
        );
        assert_eq!(n, 4);
        insta::assert_snapshot!(out, @r"
        0	the kitten
        0	kittens
        1	a mitten
        2	kitchen
        ");
    }

    #[test]
    fn no_sort_keeps_input_order() {
        let (_, out) = run(
            &["a mitten", "the kitten", "dog"],
            SublevOptionsBuilder::default().query("kitten").no_sort(true),
        );
        assert_eq!(out, "a mitten\nthe kitten\n");
    }

    #[test]
    fn print0() {
        let (_, out) = run(
            &["abc", "xyz"],
            SublevOptionsBuilder::default().query("abc").max_distance(0).print0(true),
        );
        assert_eq!(out, "abc\0");
    }

    #[test]
    fn no_match() {
        let (n, out) = run(&["abc"], SublevOptionsBuilder::default().query("zzzzz"));
        assert_eq!(n, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn items_numbered_from_elsewhere() {
        let items = [
            Item {
                index: 5,
                text: b"kitten".to_vec(),
            },
            Item {
                index: 42,
                text: b"mitten".to_vec(),
            },
        ];
        let options = SublevOptionsBuilder::default()
            .query("kitten")
            .print_distance(true)
            .build()
            .unwrap();
        let mut out = Vec::new();
        assert_eq!(filter(&mut out, &items[1..], &options).unwrap(), 1);
        assert_eq!(out, b"1\tmitten\n");

        let engine = options.engine();
        let matches = collect_matches(&engine, &items, true);
        let indices: Vec<_> = matches.iter().map(|(item, result)| (item.index, result.index)).collect();
        assert_eq!(indices, [(5, 5), (42, 42)]);
    }

    #[test]
    fn whole_prints_the_distance() {
        let options = SublevOptionsBuilder::default()
            .query("kitten")
            .max_distance(1)
            .build()
            .unwrap();
        let mut out = Vec::new();
        assert!(whole(&mut out, b"one line\nxxkitxenyy\nanother", &options).unwrap());
        assert_eq!(out, b"1\n");

        let mut out = Vec::new();
        assert!(!whole(&mut out, b"puppy", &options).unwrap());
        assert!(out.is_empty());
    }
}
