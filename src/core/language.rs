//! Language variants and compiler families.
//!
//! Both are parsed from the exact spellings used in the build document
//! (`C` / `C++`, `GNU` / `Clang`). Parsing is case-sensitive.

use std::fmt;

/// Source language of the main file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// C language
    C,
    /// C++ language
    Cxx,
}

impl Language {
    /// Get the language name as written in the build document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cxx => "C++",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Language::C),
            "C++" => Ok(Language::Cxx),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiler family requested by the build document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilerFamily {
    /// GNU Compiler Collection (gcc / g++)
    Gnu,
    /// LLVM Clang (clang / clang++)
    Clang,
}

impl CompilerFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompilerFamily::Gnu => "GNU",
            CompilerFamily::Clang => "Clang",
        }
    }

    /// Compiler driver binary for the given language.
    pub fn binary(&self, language: Language) -> &'static str {
        match (self, language) {
            (CompilerFamily::Gnu, Language::C) => "gcc",
            (CompilerFamily::Gnu, Language::Cxx) => "g++",
            (CompilerFamily::Clang, Language::C) => "clang",
            (CompilerFamily::Clang, Language::Cxx) => "clang++",
        }
    }
}

impl std::str::FromStr for CompilerFamily {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GNU" => Ok(CompilerFamily::Gnu),
            "Clang" => Ok(CompilerFamily::Clang),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

impl fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an attribute value is not a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError(pub String);

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant '{}'", self.0)
    }
}

impl std::error::Error for ParseVariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse_is_exact() {
        assert_eq!("C".parse::<Language>().unwrap(), Language::C);
        assert_eq!("C++".parse::<Language>().unwrap(), Language::Cxx);
        assert!("c".parse::<Language>().is_err());
        assert!("cpp".parse::<Language>().is_err());
    }

    #[test]
    fn test_compiler_family_parse_is_exact() {
        assert_eq!("GNU".parse::<CompilerFamily>().unwrap(), CompilerFamily::Gnu);
        assert_eq!(
            "Clang".parse::<CompilerFamily>().unwrap(),
            CompilerFamily::Clang
        );
        assert!("gnu".parse::<CompilerFamily>().is_err());
        assert!("MSVC".parse::<CompilerFamily>().is_err());
    }

    #[test]
    fn test_binary_names() {
        assert_eq!(CompilerFamily::Gnu.binary(Language::C), "gcc");
        assert_eq!(CompilerFamily::Gnu.binary(Language::Cxx), "g++");
        assert_eq!(CompilerFamily::Clang.binary(Language::C), "clang");
        assert_eq!(CompilerFamily::Clang.binary(Language::Cxx), "clang++");
    }
}
