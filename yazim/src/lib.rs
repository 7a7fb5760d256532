/*! Sentence-level Turkish spelling correction.

Corrects misspelled words inside a tokenized sentence, replacing, merging or
splitting them. Deterministic forced rules handle the regular misspelling
patterns (known misspellings, glued units, locative and question-particle
clitics, hyphenated compounds); everything else goes through multi-strategy
candidate generation filtered by morphological validity, and a sliding-window
bigram scorer picks the winner from the left and right sentence context.

The morphological analyzer and the n-gram model are collaborators consumed
through the [`morphology::Morphology`] and [`ngram::BigramModel`] traits;
[`lexicon::FlatLexicon`] and [`ngram::BigramTable`] are flat-file backed
implementations of both.

```no_run
use yazim::checker::{CheckerConfig, NgramSpellChecker, SpellChecker};
use yazim::lexicon::FlatLexicon;
use yazim::ngram::BigramTable;
use yazim::resources::CheckerResources;
use yazim::sentence::Sentence;

let dir = std::path::Path::new("resources");
let checker = NgramSpellChecker::new(
    FlatLexicon::from_dir(dir)?,
    BigramTable::from_dir(dir)?,
    CheckerResources::from_dir(dir, None)?,
    CheckerConfig::default(),
);
let corrected = checker.spell_check(&Sentence::from_line("noter hakkınad"));
println!("{}", corrected);
# Ok::<(), yazim::resources::ResourceError>(())
```
*/

#![warn(missing_docs)]

pub mod case;
pub mod checker;
pub mod constants;
pub mod lexicon;
pub mod morphology;
pub mod ngram;
pub mod resources;
pub mod sentence;
pub mod trie;
pub mod types;
