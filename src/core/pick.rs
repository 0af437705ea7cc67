//! Random candidate selection with retry on rejection.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::speech::Renderer;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PickError {
    #[error("No quotes available")]
    NoCandidates,
    #[error("None of the {tried} quotes fit in the speech bubble")]
    NothingRenders { tried: usize },
}

/// A candidate that rendered, with its art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picked<'a> {
    pub message: &'a str,
    pub art: String,
}

/// Try candidates in random order, each at most once, until one renders.
pub fn pick_and_render<'a, R>(
    renderer: &Renderer,
    candidates: &'a [String],
    rng: &mut R,
) -> Result<Picked<'a>, PickError>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(PickError::NoCandidates);
    }
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.shuffle(rng);

    for (attempt, index) in order.into_iter().enumerate() {
        let message = candidates[index].as_str();
        match renderer.render(message) {
            Ok(art) => {
                log::debug!("Rendered candidate {} after {} rejections", index, attempt);
                return Ok(Picked { message, art });
            }
            Err(e) => log::debug!("Candidate {} rejected: {}", index, e),
        }
    }
    Err(PickError::NothingRenders {
        tried: candidates.len(),
    })
}
