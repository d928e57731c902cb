use std::fmt;

use abi::{ChainId, DeletePolicy, Error, HotelId, RoomId};
use sqlx::PgConnection;
use tracing::info;

/// A row about to be deleted together with the rows that hang off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Owner {
    Chain(ChainId),
    Hotel(HotelId),
    Room(RoomId),
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Chain(id) => write!(f, "hotel chain {}", id),
            Owner::Hotel(id) => write!(f, "hotel {}", id),
            Owner::Room(id) => write!(f, "room {}", id),
        }
    }
}

impl Owner {
    fn id(&self) -> i64 {
        match *self {
            Owner::Chain(id) | Owner::Hotel(id) | Owner::Room(id) => id,
        }
    }

    /// ids of every room owned, `$1` is the owner id
    fn rooms(&self) -> &'static str {
        match self {
            Owner::Chain(_) => {
                "SELECT r.id FROM hms.rooms r JOIN hms.hotels h ON h.id = r.hotel_id WHERE h.chain_id = $1"
            }
            Owner::Hotel(_) => "SELECT id FROM hms.rooms WHERE hotel_id = $1",
            Owner::Room(_) => "SELECT $1::BIGINT",
        }
    }

    /// direct dependents that block a restricted delete
    fn dependents(&self) -> (&'static str, &'static str) {
        match self {
            Owner::Chain(_) => ("hotel(s)", "SELECT COUNT(*) FROM hms.hotels WHERE chain_id = $1"),
            Owner::Hotel(_) => ("room(s)", "SELECT COUNT(*) FROM hms.rooms WHERE hotel_id = $1"),
            Owner::Room(_) => (
                "booking(s)",
                "SELECT COUNT(*) FROM hms.bookings WHERE room_id = $1",
            ),
        }
    }

    /// Make the owner deletable under `policy`. Must run inside the
    /// transaction that deletes the owner row.
    pub(crate) async fn release(
        &self,
        policy: DeletePolicy,
        conn: &mut PgConnection,
    ) -> Result<(), Error> {
        match policy {
            DeletePolicy::Restrict => {
                let (what, sql) = self.dependents();
                let count: i64 = sqlx::query_scalar(sql)
                    .bind(self.id())
                    .fetch_one(&mut *conn)
                    .await?;
                if count > 0 {
                    return Err(Error::Conflict(format!(
                        "{} still has {} {}",
                        self, count, what
                    )));
                }
                Ok(())
            }
            DeletePolicy::Cascade => self.purge(conn).await,
        }
    }

    async fn purge(&self, conn: &mut PgConnection) -> Result<(), Error> {
        let rooms = self.rooms();
        let mut statements = vec![
            format!("DELETE FROM hms.rentals WHERE room_id IN ({})", rooms),
            format!("DELETE FROM hms.bookings WHERE room_id IN ({})", rooms),
        ];
        match self {
            Owner::Chain(_) => {
                statements.push(format!("DELETE FROM hms.rooms WHERE id IN ({})", rooms));
                statements.push("DELETE FROM hms.hotels WHERE chain_id = $1".to_string());
            }
            Owner::Hotel(_) => {
                statements.push("DELETE FROM hms.rooms WHERE hotel_id = $1".to_string());
            }
            Owner::Room(_) => {}
        }

        let mut removed = 0;
        for sql in statements {
            removed += sqlx::query(&sql)
                .bind(self.id())
                .execute(&mut *conn)
                .await?
                .rows_affected();
        }
        info!("cascade delete of {} removed {} dependent row(s)", self, removed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_should_display_entity() {
        assert_eq!(Owner::Chain(1).to_string(), "hotel chain 1");
        assert_eq!(Owner::Hotel(2).to_string(), "hotel 2");
        assert_eq!(Owner::Room(3).to_string(), "room 3");
    }

    #[test]
    fn restrict_should_count_direct_dependents() {
        assert_eq!(Owner::Chain(1).dependents().0, "hotel(s)");
        assert_eq!(Owner::Hotel(1).dependents().0, "room(s)");
        assert_eq!(Owner::Room(1).dependents().0, "booking(s)");
    }
}
