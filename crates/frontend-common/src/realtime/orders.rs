//! In-memory order collection folded from push messages

use super::message::PushMessage;
use sneakerdesk_http::{Shoe, ShoeId};
use std::rc::Rc;
use yew::Reducible;

/// Orders currently shown to the user.
///
/// `count` follows the server's figure on a full snapshot and the collection
/// length after an append; it is never edited independently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderBook {
    shoes: Vec<Shoe>,
    count: usize,
}

/// What applying a push message did to the book
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    Replaced { count: usize },
    Appended { count: usize },
    StatusUpdated { id: ShoeId },
    /// `updateStatus` named an order this book does not hold; nothing changed
    Unmatched { id: ShoeId },
}

impl OrderBook {
    pub fn new(shoes: Vec<Shoe>) -> Self {
        let count = shoes.len();
        Self { shoes, count }
    }

    pub fn shoes(&self) -> &[Shoe] {
        &self.shoes
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    pub fn find(&self, id: &ShoeId) -> Option<&Shoe> {
        self.shoes.iter().find(|shoe| shoe.id == *id)
    }

    /// Replace everything with the result of a full listing fetch
    pub fn load(&mut self, shoes: Vec<Shoe>) {
        self.count = shoes.len();
        self.shoes = shoes;
    }

    /// Fold one push message into the book
    pub fn apply(&mut self, message: PushMessage) -> Applied {
        match message {
            PushMessage::Update { count, shoes } => {
                self.shoes = shoes;
                self.count = count;
                Applied::Replaced { count }
            }
            PushMessage::Post { shoe } => {
                self.shoes.push(shoe);
                self.count = self.shoes.len();
                Applied::Appended { count: self.count }
            }
            PushMessage::UpdateStatus { shoe } => {
                match self.shoes.iter_mut().find(|existing| existing.id == shoe.id) {
                    Some(existing) => {
                        let id = shoe.id.clone();
                        *existing = shoe;
                        Applied::StatusUpdated { id }
                    }
                    None => {
                        tracing::warn!(id = %shoe.id, "status update for unknown order ignored");
                        Applied::Unmatched { id: shoe.id }
                    }
                }
            }
        }
    }
}

/// Reducer actions for the order book as held by a component
#[derive(Clone, Debug, PartialEq)]
pub enum OrderEvent {
    Loaded(Vec<Shoe>),
    Pushed(PushMessage),
}

impl Reducible for OrderBook {
    type Action = OrderEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut book = Rc::unwrap_or_clone(self);
        match action {
            OrderEvent::Loaded(shoes) => book.load(shoes),
            OrderEvent::Pushed(message) => {
                let action = message.action();
                let applied = book.apply(message);
                tracing::trace!(action, ?applied, "push message applied");
            }
        }
        Rc::new(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_new_order() -> OrderBook {
        OrderBook::new(vec![Shoe::new(1_u64, "new")])
    }

    #[test]
    fn test_post_appends_and_recounts() {
        let mut book = single_new_order();

        let applied = book.apply(PushMessage::Post {
            shoe: Shoe::new(2_u64, "new"),
        });

        assert_eq!(applied, Applied::Appended { count: 2 });
        assert_eq!(book.shoes().len(), 2);
        assert_eq!(book.count(), 2);
        assert_eq!(book.shoes()[1].id, ShoeId::from(2_u64));
    }

    #[test]
    fn test_update_status_replaces_in_place() {
        let mut book = single_new_order();

        let applied = book.apply(PushMessage::UpdateStatus {
            shoe: Shoe::new(1_u64, "shipped"),
        });

        assert_eq!(applied, Applied::StatusUpdated { id: ShoeId::from(1_u64) });
        assert_eq!(book.count(), 1);
        assert_eq!(book.shoes().len(), 1);
        assert_eq!(book.find(&ShoeId::from(1_u64)).unwrap().status, "shipped");
    }

    #[test]
    fn test_update_status_touches_first_match_only() {
        let mut book = OrderBook::new(vec![
            Shoe::new("dup", "new"),
            Shoe::new("dup", "new"),
        ]);

        book.apply(PushMessage::UpdateStatus {
            shoe: Shoe::new("dup", "shipped"),
        });

        assert_eq!(book.shoes()[0].status, "shipped");
        assert_eq!(book.shoes()[1].status, "new");
    }

    #[test]
    fn test_update_status_for_unknown_order_is_a_no_op() {
        let mut book = single_new_order();
        let before = book.clone();

        let applied = book.apply(PushMessage::UpdateStatus {
            shoe: Shoe::new(99_u64, "shipped"),
        });

        assert_eq!(applied, Applied::Unmatched { id: ShoeId::from(99_u64) });
        assert_eq!(book, before);
    }

    #[test]
    fn test_update_replaces_everything() {
        let mut book = single_new_order();
        let shoes: Vec<Shoe> = (10_u64..15).map(|id| Shoe::new(id, "new")).collect();

        let applied = book.apply(PushMessage::Update { count: 5, shoes });

        assert_eq!(applied, Applied::Replaced { count: 5 });
        assert_eq!(book.count(), 5);
        assert_eq!(book.shoes().len(), 5);
        assert!(book.find(&ShoeId::from(1_u64)).is_none());
    }

    #[test]
    fn test_update_trusts_server_count() {
        let mut book = OrderBook::default();

        book.apply(PushMessage::Update {
            count: 5,
            shoes: vec![Shoe::new("only", "new")],
        });

        assert_eq!(book.count(), 5);
        assert_eq!(book.shoes().len(), 1);
    }

    #[test]
    fn test_reducer_loads_then_applies() {
        let book = Rc::new(OrderBook::default());

        let book = book.reduce(OrderEvent::Loaded(vec![Shoe::new(1_u64, "new")]));
        assert_eq!(book.count(), 1);

        let book = book.reduce(OrderEvent::Pushed(PushMessage::Post {
            shoe: Shoe::new(2_u64, "new"),
        }));
        assert_eq!(book.count(), 2);
    }
}
