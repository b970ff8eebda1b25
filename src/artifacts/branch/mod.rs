//! Branch names and revision resolution

pub mod branch_name;
pub mod revision;

pub const DEFAULT_BRANCH: &str = "master";
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
/// Shortest and longest accepted commit id prefixes
pub const COMMIT_PREFIX_REGEX: &str = r"^[0-9a-fA-F]{6,40}$";
pub const HEAD_ALIAS: &str = "HEAD";
pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};
