use super::state::RevealKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMessage {
    /// A fade-in target crossed its visibility threshold.
    Intersected(RevealKey),
    /// The skills section became sufficiently visible.
    SkillsVisible,
}
