mod dict;

use std::{borrow::Cow, collections::{BTreeMap, HashMap}, fs, path::{Path, PathBuf}};
use aho_corasick::{AhoCorasick, MatchKind};
use anyhow::Context as _;
use clap::Parser;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::files;

#[derive(Parser)]
pub struct Args {
    #[arg(long, default_value = "src", help = "Directory of frontend sources")]
    dir: PathBuf,
    #[arg(long = "ext", default_values_t = ["ts".to_owned(), "tsx".to_owned()], help = "file extensions to rewrite")]
    exts: Vec<String>,
    #[arg(long, help = "JSON object of extra entries, overriding built-in ones")]
    dict: Option<PathBuf>,
    #[arg(from_global)]
    dry_run: bool
}

/// Dictionary substitution with leftmost-longest matching, so that a key is
/// never split by a shorter key that starts at the same position.
#[derive(Clone, Debug)]
pub struct Translator {
    ac: AhoCorasick,
    replacements: Vec<String>
}

impl Translator {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> anyhow::Result<Self>
    where
        K: Into<String>,
        V: Into<String>
    {
        let entries = entries.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect::<BTreeMap<String, String>>();
        let (keys, replacements): (Vec<String>, Vec<String>) = entries.into_iter().unzip();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)?;

        Ok(Self { ac, replacements })
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Self::new(dict::ENTRIES.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn translate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.ac.is_match(text) {
            Cow::Owned(self.ac.replace_all(text, &self.replacements))
        } else {
            Cow::Borrowed(text)
        }
    }
}

fn load_extra(path: &Path) -> anyhow::Result<HashMap<String, String>> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not a JSON object of strings", path.display()))
}

/// Rewrites the file in place; returns whether anything changed.
fn translate_file(tl: &Translator, path: &Path, dry_run: bool) -> anyhow::Result<bool> {
    let original = fs::read_to_string(path)?;
    let Cow::Owned(translated) = tl.translate(&original) else { return Ok(false) };
    if translated == original {
        return Ok(false);
    }
    if !dry_run {
        fs::write(path, translated)?;
    }
    Ok(true)
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let tl = match &args.dict {
        None => Translator::builtin()?,
        Some(path) => {
            let extra = load_extra(path)?;
            Translator::new(dict::ENTRIES.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())).chain(extra))?
        }
    };
    debug!("dictionary has {} entries", tl.len());

    let files = files::collect(&args.dir, &args.exts)?;

    let changed = files.par_iter()
        .map(|path| match translate_file(&tl, path, args.dry_run) {
            Ok(changed) => changed,
            Err(e) => {
                warn!("failed to translate {}: {e:#}", path.display());
                false
            }
        })
        .collect::<Vec<bool>>();

    let translated = files.iter()
        .zip(&changed)
        .filter(|&(_, &c)| c)
        .map(|(p, _)| files::relative(p, &args.dir))
        .collect::<Vec<_>>();

    for path in &translated {
        println!("translated: {}", path.display());
    }

    let sep = "=".repeat(70);
    println!("\n{sep}");
    println!("total files:      {}", files.len());
    println!("translated files: {}", translated.len());
    println!("unchanged files:  {}", files.len() - translated.len());
    if args.dry_run {
        println!("(dry run, nothing written)");
    }
    println!("{sep}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_key_wins() {
        let tl = Translator::builtin().unwrap();
        assert_eq!(tl.translate("退出登录"), "Logout");
        assert_eq!(tl.translate("<Button>保存成功</Button>"), "<Button>Saved successfully</Button>");
        assert_eq!(tl.translate("文章列表 | 文章"), "Article List | Articles");
    }

    #[test]
    fn later_duplicates_override() {
        let tl = Translator::builtin().unwrap();
        assert_eq!(tl.translate("编辑"), "Edit");
        assert_eq!(tl.translate("首页"), "First");
    }

    #[test]
    fn untouched_text_is_borrowed() {
        let tl = Translator::builtin().unwrap();
        assert!(matches!(tl.translate("const x = 1;"), Cow::Borrowed(_)));
    }

    #[test]
    fn equal_length_keys_do_not_depend_on_order() {
        let tl = Translator::new([("ab", "X"), ("bc", "Y"), ("", "nothing")]).unwrap();
        assert_eq!(tl.len(), 2);
        assert_eq!(tl.translate("abc"), "Xc");
        assert_eq!(tl.translate("bcab"), "YX");
    }

    #[test]
    fn rewrites_files_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let changed = dir.path().join("a.tsx");
        let same = dir.path().join("b.tsx");
        fs::write(&changed, "<h1>文章详情</h1>").unwrap();
        fs::write(&same, "<h1>Details</h1>").unwrap();

        let tl = Translator::builtin().unwrap();
        assert!(translate_file(&tl, &changed, true).unwrap());
        assert_eq!(fs::read_to_string(&changed).unwrap(), "<h1>文章详情</h1>");

        assert!(translate_file(&tl, &changed, false).unwrap());
        assert_eq!(fs::read_to_string(&changed).unwrap(), "<h1>Article Details</h1>");
        assert!(!translate_file(&tl, &same, false).unwrap());
    }

    #[test]
    fn extra_entries_override_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.json");
        fs::write(&path, r#"{ "文章": "Posts" }"#).unwrap();

        let mut entries = dict::ENTRIES.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())).collect::<Vec<_>>();
        entries.extend(load_extra(&path).unwrap());
        let tl = Translator::new(entries).unwrap();
        assert_eq!(tl.translate("全部文章 文章"), "All Articles Posts");
    }
}
