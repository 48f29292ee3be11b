//! Booking status state machine
//!
//! Transitions are admin-gated and verified at write time: legality is
//! checked against a fresh read, then the write re-asserts the expected
//! status. When two admins race on the same booking, exactly one write
//! lands; the loser observes the new status and gets a transition error.

use shared::error::{AppError, AppResult};
use shared::models::{BookingDetail, BookingStatus};

use crate::auth::CurrentUser;
use crate::booking::repository::BookingRepository;

/// Drive one booking through one status transition
pub async fn transition<R: BookingRepository>(
    repo: &R,
    booking_id: i64,
    target: BookingStatus,
    actor: &CurrentUser,
) -> AppResult<BookingDetail> {
    if !actor.is_admin() {
        return Err(AppError::admin_required());
    }

    // PENDING is the initial status only, never a target
    if target == BookingStatus::Pending {
        return Err(AppError::invalid_transition(
            "PENDING is not a valid transition target",
        ));
    }

    let booking = repo
        .find(booking_id)
        .await?
        .ok_or_else(|| AppError::booking_not_found(booking_id))?;

    if !booking.status.can_transition_to(target) {
        return Err(AppError::invalid_transition(format!(
            "Cannot transition booking {booking_id} from {} to {target}",
            booking.status
        ))
        .with_detail("current_status", booking.status.as_str())
        .with_detail("target_status", target.as_str()));
    }

    let updated = repo
        .update_status_checked(booking_id, booking.status, target)
        .await?;

    tracing::info!(
        booking_id,
        from = %booking.status,
        to = %updated.status,
        admin_id = actor.id,
        "booking status transitioned"
    );

    repo.find_detail(booking_id)
        .await?
        .ok_or_else(|| AppError::booking_not_found(booking_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::repository::memory::MemoryBookingRepository;
    use shared::error::ErrorCode;
    use shared::models::Role;

    fn admin() -> CurrentUser {
        CurrentUser {
            id: 1,
            name: "Admin".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
        }
    }

    fn customer() -> CurrentUser {
        CurrentUser {
            id: 2,
            name: "Customer".into(),
            email: "customer@example.com".into(),
            role: Role::Customer,
        }
    }

    #[tokio::test]
    async fn test_approve_pending() {
        let repo = MemoryBookingRepository::with_zones(&[1]);
        let booking = repo.seed_booking(2, 1, BookingStatus::Pending);

        let detail = transition(&repo, booking.id, BookingStatus::Approved, &admin())
            .await
            .unwrap();
        assert_eq!(detail.status, BookingStatus::Approved);
    }

    #[tokio::test]
    async fn test_full_lifecycle_to_booked() {
        let repo = MemoryBookingRepository::with_zones(&[1]);
        let booking = repo.seed_booking(2, 1, BookingStatus::Pending);

        transition(&repo, booking.id, BookingStatus::Approved, &admin())
            .await
            .unwrap();
        let detail = transition(&repo, booking.id, BookingStatus::Booked, &admin())
            .await
            .unwrap();
        assert_eq!(detail.status, BookingStatus::Booked);
    }

    #[tokio::test]
    async fn test_pending_cannot_jump_to_booked() {
        let repo = MemoryBookingRepository::with_zones(&[1]);
        let booking = repo.seed_booking(2, 1, BookingStatus::Pending);

        let err = transition(&repo, booking.id, BookingStatus::Booked, &admin())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);

        // Booking is untouched
        let detail = repo.find(booking.id).await.unwrap().unwrap();
        assert_eq!(detail.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn test_terminal_states_accept_nothing() {
        let repo = MemoryBookingRepository::with_zones(&[1]);
        let rejected = repo.seed_booking(2, 1, BookingStatus::Rejected);
        let booked = repo.seed_booking(2, 1, BookingStatus::Booked);

        for (id, target) in [
            (rejected.id, BookingStatus::Approved),
            (booked.id, BookingStatus::Approved),
            (booked.id, BookingStatus::Rejected),
        ] {
            let err = transition(&repo, id, target, &admin()).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidTransition);
        }
    }

    #[tokio::test]
    async fn test_pending_is_never_a_target() {
        let repo = MemoryBookingRepository::with_zones(&[1]);
        let booking = repo.seed_booking(2, 1, BookingStatus::Approved);

        let err = transition(&repo, booking.id, BookingStatus::Pending, &admin())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
    }

    #[tokio::test]
    async fn test_non_admin_forbidden() {
        let repo = MemoryBookingRepository::with_zones(&[1]);
        let booking = repo.seed_booking(2, 1, BookingStatus::Pending);

        let err = transition(&repo, booking.id, BookingStatus::Approved, &customer())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AdminRequired);
    }

    #[tokio::test]
    async fn test_missing_booking() {
        let repo = MemoryBookingRepository::with_zones(&[1]);

        let err = transition(&repo, 999, BookingStatus::Approved, &admin())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingNotFound);
    }

    #[tokio::test]
    async fn test_racing_admins_one_wins() {
        // Two admins race APPROVED vs REJECTED on the same PENDING booking.
        // The conditional write guarantees exactly one lands.
        for _ in 0..50 {
            let repo = MemoryBookingRepository::with_zones(&[1]);
            let booking = repo.seed_booking(2, 1, BookingStatus::Pending);

            let approve = {
                let repo = repo.clone();
                tokio::spawn(async move {
                    transition(&repo, booking.id, BookingStatus::Approved, &admin()).await
                })
            };
            let reject = {
                let repo = repo.clone();
                tokio::spawn(async move {
                    transition(&repo, booking.id, BookingStatus::Rejected, &admin()).await
                })
            };

            let (a, r) = (approve.await.unwrap(), reject.await.unwrap());
            assert_ne!(a.is_ok(), r.is_ok(), "exactly one transition must win");

            let final_status = repo.find(booking.id).await.unwrap().unwrap().status;
            match (&a, &r) {
                (Ok(detail), Err(err)) => {
                    assert_eq!(detail.status, BookingStatus::Approved);
                    assert_eq!(final_status, BookingStatus::Approved);
                    assert_eq!(err.code, ErrorCode::InvalidTransition);
                }
                (Err(err), Ok(detail)) => {
                    assert_eq!(detail.status, BookingStatus::Rejected);
                    assert_eq!(final_status, BookingStatus::Rejected);
                    assert_eq!(err.code, ErrorCode::InvalidTransition);
                }
                _ => unreachable!(),
            }
        }
    }
}
