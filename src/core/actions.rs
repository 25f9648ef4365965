//! Argument lists for every delegated package-manager call

use crate::{core::manager::PackageManager, utils::process::Invocation};

/// `<pm> -Syu --noconfirm`
pub fn upgrade(manager: PackageManager) -> Invocation {
    Invocation::new(manager.binary()).args(["-Syu", "--noconfirm"])
}

/// `<pm> -S <packages>`
pub fn install(manager: PackageManager, packages: &[String]) -> Invocation {
    Invocation::new(manager.binary()).arg("-S").args(packages)
}

/// `<pm> -R <packages>`
pub fn remove(manager: PackageManager, packages: &[String]) -> Invocation {
    Invocation::new(manager.binary()).arg("-R").args(packages)
}

/// `<pm> -Rns <packages>`, also dropping unneeded dependencies and configs
pub fn purge(manager: PackageManager, packages: &[String]) -> Invocation {
    Invocation::new(manager.binary()).arg("-Rns").args(packages)
}

/// `<pm> -Sc --noconfirm`
pub fn clean_cache(manager: PackageManager) -> Invocation {
    Invocation::new(manager.binary()).args(["-Sc", "--noconfirm"])
}

/// `pacman -Qdtq`: installed-as-dependency packages nothing requires any more
pub fn list_orphans() -> Invocation {
    Invocation::new("pacman").arg("-Qdtq")
}

/// `<pm> -Rns <orphans>`
pub fn remove_orphans(manager: PackageManager, orphans: &[String]) -> Invocation {
    purge(manager, orphans)
}

/// `<pm> <query>`, the helper's interactive search-and-install
pub fn search(manager: PackageManager, query: &[String]) -> Invocation {
    Invocation::new(manager.binary()).args(query)
}

/// `pacman -Ssq`: every package name in the sync databases
pub fn list_packages() -> Invocation {
    Invocation::new("pacman").arg("-Ssq")
}

/// Split operand text into separate arguments
pub fn split_operand(operand: &str) -> Vec<String> {
    operand.split_whitespace().map(str::to_string).collect()
}

/// Parse one-package-per-line output
pub fn parse_package_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
