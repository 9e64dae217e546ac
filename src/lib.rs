pub use self::errors::*;
pub use self::josephus::*;
pub use self::order::*;
pub use self::ring::*;
pub use self::roster::*;
pub use self::strategy::*;

mod errors;
mod josephus;
mod order;
mod ring;
mod roster;
mod strategy;

#[cfg(test)]
mod tests {
    use enum_map::enum_map;

    use crate::{winner, Circle, JosephusError, Strategy, MAX_PLAYERS};

    fn circle(n: i64, k: i64) -> Circle {
        let circle = Circle::new(n, k).unwrap();
        println!("n={n:<3} k={k:<3} {}", circle.elimination_order());
        circle
    }

    #[test]
    fn known_winners() {
        assert_eq!(circle(7, 3).winner(), 4);
        assert_eq!(circle(5, 2).winner(), 3);
        assert_eq!(circle(6, 5).winner(), 1);
        assert_eq!(circle(41, 3).winner(), 31);
    }

    #[test]
    fn single_player_wins() {
        for k in [1, 2, 3, 10, i64::MAX] {
            assert_eq!(winner(1, k), Ok(1));
        }
        assert!(circle(1, 4).elimination_order().is_empty());
    }

    #[test]
    fn unit_step_leaves_last_player() {
        for n in 1..=50 {
            assert_eq!(winner(n, 1), Ok(n as usize));
        }
        assert_eq!(circle(5, 1).eliminations().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn step_larger_than_circle() {
        assert_eq!(circle(3, 7).winner(), circle(3, 1).winner());
        assert_eq!(circle(2, 2).winner(), 1);
        assert_eq!(Circle::new(10, i64::MAX).unwrap().verify(), Ok(circle(10, i64::MAX).winner()));
    }

    #[test]
    fn elimination_order() {
        let order = circle(7, 3).elimination_order();
        assert_eq!(order.iter().collect::<Vec<_>>(), vec![3, 6, 2, 7, 5, 1]);
        assert_eq!(order.to_string(), "3 6 2 7 5 1 -> 4");
        assert_eq!(order.len(), 6);
        assert_eq!(order.survivor(), 4);
        assert_eq!(order.round_of(7), Some(4));
        assert_eq!(order.player_at(2), Some(6));
        assert_eq!(order.round_of(4), None);
        assert_eq!(order.player_at(7), None);
    }

    #[test]
    fn circle_shrinks_by_one() {
        let mut roster = circle(9, 4).eliminations();
        assert_eq!(roster.len(), 8);
        assert_eq!(roster.survivor(), None);
        let mut remaining = roster.remaining();
        while roster.next().is_some() {
            assert_eq!(roster.remaining(), remaining - 1);
            remaining = roster.remaining();
        }
        assert_eq!(remaining, 1);
        assert_eq!(roster.survivor(), Some(circle(9, 4).winner()));
        assert_eq!(roster.next(), None);

        let mut ring = circle(9, 4).ring();
        assert_eq!(ring.survivor(), None);
        let mut remaining = ring.remaining();
        assert_eq!(remaining, 9);
        while ring.next().is_some() {
            assert_eq!(ring.remaining(), remaining - 1);
            remaining = ring.remaining();
        }
        assert_eq!(ring.remaining(), 1);
        assert_eq!(ring.survivor(), roster.survivor());
    }

    #[test]
    fn strategies_agree() {
        let circle = circle(7, 3);
        assert_eq!(circle.winners(), enum_map! { _ => 4 });
        assert_eq!(circle.ring().collect::<Vec<_>>(), circle.eliminations().collect::<Vec<_>>());
        assert_eq!(circle.verify(), Ok(4));
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(winner(0, 3), Err(JosephusError::InvalidPlayerCount(0)));
        assert_eq!(winner(-5, 3), Err(JosephusError::InvalidPlayerCount(-5)));
        assert_eq!(winner(5, 0), Err(JosephusError::InvalidStepCount(0)));
        assert_eq!(winner(5, -1), Err(JosephusError::InvalidStepCount(-1)));
        assert_eq!(winner(0, 0), Err(JosephusError::InvalidPlayerCount(0)));
    }

    #[test]
    fn oversized_circle_rejected() {
        let max = MAX_PLAYERS as i64;
        assert_eq!(winner(max + 1, 2), Err(JosephusError::TooManyPlayers(max + 1)));
        assert_eq!(winner(1_000_000_000_000, 2), Err(JosephusError::TooManyPlayers(1_000_000_000_000)));
        assert_eq!(winner(i64::MAX, 0), Err(JosephusError::TooManyPlayers(i64::MAX)));
        assert_eq!(Circle::new(max, i64::MAX).map(|c| c.players()), Ok(MAX_PLAYERS));
        assert_eq!(
            JosephusError::TooManyPlayers(max + 1).to_string(),
            format!("too many players: {} (at most {MAX_PLAYERS})", max + 1)
        );
    }

    #[test]
    fn strategy_names() {
        assert_eq!("Ring".parse::<Strategy>(), Ok(Strategy::Ring));
        assert_eq!("vector".parse::<Strategy>(), Ok(Strategy::Roster));
        assert_eq!(" formula ".parse::<Strategy>(), Ok(Strategy::Recurrence));
        assert_eq!("heap".parse::<Strategy>(), Err(JosephusError::UnknownStrategy("heap".to_string())));
        assert_eq!(Strategy::Recurrence.to_string(), "recurrence");
    }

    #[test]
    fn mismatch_message() {
        let err = JosephusError::StrategyMismatch(enum_map! {
            Strategy::Roster => 4,
            Strategy::Ring => 4,
            Strategy::Recurrence => 2,
        });
        assert_eq!(err.to_string(), "strategies disagree: roster=4, ring=4, recurrence=2");
    }
}
