use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

pub struct NodeDetails<A> {
    pub visits: usize,
    pub children: Vec<(A, Ucb)>,
}

impl<A: Display> Display for NodeDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let actions = format!(
            "[{}]",
            self.children
                .iter()
                .fold(String::new(), |acc, (a, ucb)| acc
                    + &format!("\n\t(A: {}, {}),", a, ucb))
        );

        write!(
            f,
            "V: {visits}, Actions: {actions}",
            visits = self.visits,
            actions = actions
        )
    }
}

impl<A: Debug + Display> Debug for NodeDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

#[derive(PartialEq)]
#[allow(non_snake_case)]
pub struct Ucb {
    pub Nsa: usize,
    pub Qsa: f64,
    pub Usa: f64,
    pub UCB: f64,
}

impl Display for Ucb {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Nsa: {Nsa}, Qsa: {Qsa:.3}, Usa: {Usa:.3}, UCB: {UCB:.3}",
            Nsa = self.Nsa,
            Qsa = self.Qsa,
            Usa = self.Usa,
            UCB = self.UCB,
        )
    }
}

impl Debug for Ucb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Ord for Ucb {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.Nsa, &self.Qsa, &self.Usa).partial_cmp(&(other.Nsa, &other.Qsa, &other.Usa)) {
            Some(ordering) => ordering,
            None => {
                panic!(
                    "Could not compare: {:?} to {:?}",
                    (self.Nsa, &self.Qsa, &self.Usa),
                    (other.Nsa, &other.Qsa, &other.Usa)
                );
            }
        }
    }
}

impl PartialOrd for Ucb {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Ucb {}
