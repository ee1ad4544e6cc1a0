use std::collections::HashSet;
use std::sync::LazyLock;

/// Folder exclusions that are always active, appended after the user's list.
pub const BASELINE_EXCLUDE_FOLDERS: &str = ".*,bin,target,images,Lib,node_modules";

/// File exclusions that are always active, appended after the user's list.
pub const BASELINE_EXCLUDE_FILES: &str = "*.min.js";

/// File extensions the scanner understands. Everything else is pruned.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    ".ac",
    ".am",
    ".apexp",
    ".app",
    ".apxc",
    ".asax",
    ".ascx",
    ".asp",
    ".aspx",
    ".bas",
    ".c",
    ".c++",
    ".cbl",
    ".cc",
    ".cfg",
    ".cgi",
    ".cls",
    ".cmake",
    ".cmp",
    ".cob",
    ".component",
    ".conf",
    ".config",
    ".configurations",
    ".cpp",
    ".cpy",
    ".cs",
    ".cshtml",
    ".csproj",
    ".csv",
    ".ctl",
    ".ctp",
    ".cxx",
    ".dart",
    ".dspf",
    ".dsr",
    ".ec",
    ".eco",
    ".env",
    ".env_cxsca-container-build-args",
    ".erb",
    ".evt",
    ".frm",
    ".ftl",
    ".go",
    ".gradle",
    ".groovy",
    ".gsh",
    ".gsp",
    ".gtl",
    ".gvy",
    ".gy",
    ".h",
    ".h++",
    ".handlebars",
    ".hbs",
    ".hh",
    ".hpp",
    ".htm",
    ".html",
    ".hxx",
    ".inc",
    ".ini",
    ".jade",
    ".java",
    ".js",
    ".jsf",
    ".json",
    ".jsp",
    ".jspdsbld",
    ".jspf",
    ".jsx",
    ".kt",
    ".kts",
    ".latex",
    ".lock",
    ".lua",
    ".m",
    ".master",
    ".mf",
    ".mod",
    ".mustache",
    ".npmrc",
    ".object",
    ".page",
    ".pc",
    ".pck",
    ".pco",
    ".ph",
    ".php",
    ".php3",
    ".php4",
    ".php5",
    ".phtm",
    ".phtml",
    ".pkb",
    ".pkh",
    ".pks",
    ".pl",
    ".plist",
    ".pls",
    ".plx",
    ".pm",
    ".private",
    ".pro",
    ".properties",
    ".psgi",
    ".pug",
    ".py",
    ".rb",
    ".report",
    ".resolved",
    ".rev",
    ".rhtml",
    ".rjs",
    ".rpg",
    ".rpg38",
    ".rpgle",
    ".rs",
    ".rxml",
    ".sbt",
    ".scala",
    ".snapshot",
    ".sqb",
    ".sql",
    ".sqlrpg",
    ".sqlrpgle",
    ".sum",
    ".swift",
    ".tag",
    ".target",
    ".testtarget",
    ".tex",
    ".tgr",
    ".tld",
    ".toml",
    ".tpl",
    ".trigger",
    ".ts",
    ".tsx",
    ".twig",
    ".txt",
    ".vb",
    ".vbp",
    ".vbproj",
    ".vbs",
    ".vm",
    ".vue",
    ".wod",
    ".workflow",
    ".xaml",
    ".xhtml",
    ".xib",
    ".xml",
    ".xsaccess",
    ".xsapp",
    ".xsjs",
    ".xsjslib",
    ".yaml",
    ".yarnrc",
    ".yml",
];

/// Lowercase file names kept even though they have no extension
/// (build manifests and the plain files inside a `.git` directory).
pub const SUPPORTED_EXTENSIONLESS_NAMES: &[&str] = &[
    "dockerfile",
    "cartfile",
    "podfile",
    "gemfile",
    "cpanfile",
    "exclude",
    "head",
    "master",
    "main",
    "commit_editmsg",
    "config",
    "description",
    "index",
    "packed-refs",
];

static EXTENSION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SUPPORTED_EXTENSIONS.iter().copied().collect());

static EXTENSIONLESS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SUPPORTED_EXTENSIONLESS_NAMES.iter().copied().collect());

/// Returns true if `name` ends with one of [`SUPPORTED_EXTENSIONS`].
///
/// Every entry starts with a dot, so only the suffixes that begin at a dot
/// in `name` need a set lookup. `name` is expected to be lowercase already.
pub fn has_supported_extension(name: &str) -> bool {
    name.match_indices('.')
        .any(|(idx, _)| EXTENSION_SET.contains(&name[idx..]))
}

/// Returns true if `name` (lowercase) is an allowed extensionless file name.
pub fn is_supported_extensionless(name: &str) -> bool {
    EXTENSIONLESS_SET.contains(name)
}

/// Joins a user-supplied exclusion list with a baseline list.
///
/// An empty user list still yields a leading comma; classification drops
/// the empty token that produces.
pub fn with_baseline(user: &str, baseline: &str) -> String {
    format!("{user},{baseline}")
}
