use oop_concepts::animal::{chorus, Animal, Dog, Speaker};
use oop_concepts::human::Human;
use oop_concepts::receiver::{full_name, Computer};
use oop_concepts::report::Report;
use oop_concepts::visibility::{DirectorsCut, PrivateMovie, ProtectedMovie, PublicMovie};
use oop_concepts::{Catalog, CatalogLoader};
use std::env;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_IDS: &[u64] = &[215, 999, 1225];

fn visibility() {
    println!("{}", Report::section("Visibility"));
    let public = PublicMovie::new("The Elephant Man", "David Lynch");
    println!("public field: {}", public.title);
    println!("public method: {}", public.details());

    let private = PrivateMovie::new("The Elephant Man", "David Lynch");
    println!("private, via show_details: {}", private.show_details());

    let cut = DirectorsCut::new(ProtectedMovie::new("Eraserhead", "David Lynch"), 12);
    println!("protected, via a wrapper: {}\n", cut.show_details());
}

fn receivers() {
    println!("{}", Report::section("Receivers"));
    println!("free function: {}", full_name());
    let computer = Computer::new(12);
    println!("computer.ram() = {}", computer.ram());
    println!("computer.get(\"prop\") = {:?}\n", computer.get("prop"));
}

fn speakers() {
    println!("{}", Report::section("Traits"));
    let animal = Animal::new("Dog");
    let dog = Dog::new("Miloo");
    println!("{}", animal.speak());
    println!("{}", dog.speak());
    for line in chorus(&[&animal, &dog]) {
        println!("  dyn: {line}");
    }
    println!();
}

fn accessors() {
    println!("{}", Report::section("Getters and setters"));
    let mut me = Human::new();
    me.set_name("Foo");
    me.set_last_name("Bar");
    println!("{}\n", me.full_name());
}

fn lookups(catalog: &Catalog, ids: &[u64]) {
    println!("{}", Report::section("Catalog lookup"));
    for id in catalog.duplicate_ids() {
        println!("{}", Report::warning(&format!("id {id} appears more than once, first wins")));
    }
    for &id in ids {
        println!("{}", Report::lookup(id, catalog.find(id)));
    }
}

/// Parsed command line: `walkthrough [CATALOG_FILE] [ID ...]`.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    catalog: Option<PathBuf>,
    ids: Vec<u64>,
    rejected: Vec<String>,
}

impl CliArgs {
    /// Ids to look up. Defaults apply only when no id arguments were given.
    fn lookup_ids(&self) -> Vec<u64> {
        if self.ids.is_empty() && self.rejected.is_empty() {
            DEFAULT_IDS.to_vec()
        } else {
            self.ids.clone()
        }
    }
}

fn looks_like_catalog(arg: &str, is_file: &impl Fn(&Path) -> bool) -> bool {
    let path = Path::new(arg);
    if is_file(path) {
        return true;
    }
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref(),
        Some("json") | Some("toml")
    )
}

/// The first argument is the catalog when it names an existing file or has a
/// catalog extension. Everything else must be a `u64` id; the rest are
/// collected in `rejected`.
fn parse_args(
    args: impl IntoIterator<Item = String>,
    is_file: impl Fn(&Path) -> bool,
) -> CliArgs {
    let mut args = args.into_iter().peekable();
    let mut parsed = CliArgs::default();

    if let Some(first) = args.peek() {
        if looks_like_catalog(first, &is_file) {
            parsed.catalog = args.next().map(PathBuf::from);
        }
    }

    for arg in args {
        match arg.parse::<u64>() {
            Ok(id) => parsed.ids.push(id),
            Err(_) => parsed.rejected.push(arg),
        }
    }
    parsed
}

fn main() {
    if !Report::should_use_colors() {
        colored::control::set_override(false);
    }

    let args = parse_args(env::args().skip(1), |path| path.is_file());
    for arg in &args.rejected {
        println!("{}", Report::warning(&format!("skipping non-numeric id '{arg}'")));
    }

    let catalog = match &args.catalog {
        Some(path) => match CatalogLoader::load(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                eprintln!("{}", Report::error(&err.to_string()));
                process::exit(1);
            }
        },
        None => Catalog::classics(),
    };

    visibility();
    receivers();
    speakers();
    accessors();
    lookups(&catalog, &args.lookup_ids());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_files(_: &Path) -> bool {
        false
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let parsed = parse_args(args(&[]), no_files);
        assert_eq!(parsed, CliArgs::default());
        assert_eq!(parsed.lookup_ids(), vec![215, 999, 1225]);
    }

    #[test]
    fn test_ids_only() {
        let parsed = parse_args(args(&["635", "180"]), no_files);
        assert_eq!(parsed.catalog, None);
        assert_eq!(parsed.lookup_ids(), vec![635, 180]);
    }

    #[test]
    fn test_negative_id_is_rejected_not_a_path() {
        let parsed = parse_args(args(&["-5", "215"]), no_files);
        assert_eq!(parsed.catalog, None);
        assert_eq!(parsed.ids, vec![215]);
        assert_eq!(parsed.rejected, vec!["-5".to_string()]);
        assert_eq!(parsed.lookup_ids(), vec![215]);
    }

    #[test]
    fn test_existing_file_named_like_an_id_is_the_catalog() {
        let parsed = parse_args(args(&["215", "279"]), |path: &Path| path == Path::new("215"));
        assert_eq!(parsed.catalog, Some(PathBuf::from("215")));
        assert_eq!(parsed.ids, vec![279]);
    }

    #[test]
    fn test_catalog_extension_marks_a_path() {
        let parsed = parse_args(args(&["missing.TOML", "215"]), no_files);
        assert_eq!(parsed.catalog, Some(PathBuf::from("missing.TOML")));
        assert_eq!(parsed.ids, vec![215]);
    }

    #[test]
    fn test_rejected_ids_do_not_fall_back_to_defaults() {
        let parsed = parse_args(args(&["cat.json", "abc"]), no_files);
        assert_eq!(parsed.catalog, Some(PathBuf::from("cat.json")));
        assert_eq!(parsed.rejected, vec!["abc".to_string()]);
        assert!(parsed.lookup_ids().is_empty());
    }

    #[test]
    fn test_catalog_alone_uses_defaults() {
        let parsed = parse_args(args(&["cat.json"]), no_files);
        assert_eq!(parsed.lookup_ids(), vec![215, 999, 1225]);
    }

    #[test]
    fn test_only_first_argument_can_be_a_catalog() {
        let parsed = parse_args(args(&["215", "cat.json"]), no_files);
        assert_eq!(parsed.catalog, None);
        assert_eq!(parsed.ids, vec![215]);
        assert_eq!(parsed.rejected, vec!["cat.json".to_string()]);
    }
}
