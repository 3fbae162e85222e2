//! Traffic-light program synthesis.
//!
//! CityFlow describes a signal plan as a list of phases, each naming the
//! road links that have right of way.  SUMO wants one state character per
//! signal-controlled connection (link index), so every road link is expanded
//! to the link indices of its lane links.
//!
//! # Transition encoding
//!
//! A granted link is `G` (priority green) when it was already `G` in the
//! phase immediately before, and `g` (yield green) when it is newly granted.
//! The first phase has no predecessor and grants `G`.  A `g` that stays
//! granted stays `g`: only `G` is carried forward.
//!
//! ```text
//! road link grants:  {0}   {0}   {1}   {0,1}
//! link 0 (road 0):    G     G     r     g
//! link 1 (road 1):    r     r     g     g
//! ```

use crate::loader::RawLightPhase;
use crate::{NetworkError, NetworkResult};

/// Signal state of one link index during one phase.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LinkState {
    /// `r` — stop.
    Red,
    /// `g` — green, must yield.
    Green,
    /// `G` — green with priority.
    PriorityGreen,
}

impl LinkState {
    pub fn as_char(self) -> char {
        match self {
            LinkState::Red           => 'r',
            LinkState::Green         => 'g',
            LinkState::PriorityGreen => 'G',
        }
    }
}

/// One phase of a static program.
#[derive(Clone, Debug, PartialEq)]
pub struct Phase {
    /// Seconds.
    pub duration: f64,
    /// One character per link index of the owning junction.
    pub state:    String,
}

/// A static traffic-light program.  `id` equals the controlled junction's id.
#[derive(Clone, Debug, PartialEq)]
pub struct TlLogic {
    pub id:     String,
    pub phases: Vec<Phase>,
}

/// Encode CityFlow light phases into SUMO phase states.
///
/// `link_groups[r]` lists the link indices produced by road link `r`;
/// `link_count` is the junction's total number of link indices.
///
/// This is a left fold over `phases` carrying the previous phase's states.
///
/// # Errors
///
/// [`NetworkError::UnknownRoadLink`] if a phase names a road link index
/// outside `link_groups`.
pub fn encode_phases(
    junction_id: &str,
    link_groups: &[Vec<usize>],
    link_count:  usize,
    phases:      &[RawLightPhase],
) -> NetworkResult<Vec<Phase>> {
    let (encoded, _) = phases.iter().enumerate().try_fold(
        (Vec::with_capacity(phases.len()), None::<Vec<LinkState>>),
        |(mut encoded, prev), (phase_idx, phase)| {
            let mut states = vec![LinkState::Red; link_count];

            for &road_link in &phase.available_road_links {
                let links = link_groups.get(road_link).ok_or_else(|| {
                    NetworkError::UnknownRoadLink {
                        junction:        junction_id.to_owned(),
                        phase:           phase_idx,
                        road_link,
                        road_link_count: link_groups.len(),
                    }
                })?;
                for &k in links {
                    states[k] = granted_state(prev.as_deref(), k);
                }
            }

            encoded.push(Phase {
                duration: phase.time,
                state:    states.iter().map(|s| s.as_char()).collect(),
            });
            Ok::<_, NetworkError>((encoded, Some(states)))
        },
    )?;
    Ok(encoded)
}

/// State of a granted link `k` given the preceding phase (if any).
#[inline]
fn granted_state(prev: Option<&[LinkState]>, k: usize) -> LinkState {
    match prev {
        None => LinkState::PriorityGreen,
        Some(p) if p[k] == LinkState::PriorityGreen => LinkState::PriorityGreen,
        Some(_) => LinkState::Green,
    }
}
