use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{Booking, BookingStatus, ContactMessage, EventType, SessionUser, User};

const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

// ── Bookings ──

pub fn create_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO bookings (id, name, email, phone, event_type, date, time_slot, guests, special_requests, estimated_price, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            booking.id,
            booking.name,
            booking.email,
            booking.phone,
            booking.event_type.as_str(),
            booking.date.format("%Y-%m-%d").to_string(),
            booking.time_slot,
            booking.guests,
            booking.special_requests,
            booking.estimated_price,
            booking.status.as_str(),
            booking.created_at.format(DATETIME_FMT).to_string(),
            booking.updated_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_all_bookings(
    conn: &Connection,
    status_filter: Option<&str>,
    limit: i64,
) -> anyhow::Result<Vec<Booking>> {
    let (sql, params_vec): (String, Vec<Box<dyn rusqlite::types::ToSql>>) = match status_filter {
        Some(status) => (
            "SELECT id, name, email, phone, event_type, date, time_slot, guests, special_requests, estimated_price, status, created_at, updated_at \
             FROM bookings WHERE status = ?1 ORDER BY created_at DESC LIMIT ?2"
                .to_string(),
            vec![
                Box::new(status.to_string()) as Box<dyn rusqlite::types::ToSql>,
                Box::new(limit),
            ],
        ),
        None => (
            "SELECT id, name, email, phone, event_type, date, time_slot, guests, special_requests, estimated_price, status, created_at, updated_at \
             FROM bookings ORDER BY created_at DESC LIMIT ?1"
                .to_string(),
            vec![Box::new(limit) as Box<dyn rusqlite::types::ToSql>],
        ),
    };

    let mut stmt = conn.prepare(&sql)?;
    let params_refs: Vec<&dyn rusqlite::types::ToSql> =
        params_vec.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(params_refs.as_slice(), |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn get_booking_by_id(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, name, email, phone, event_type, date, time_slot, guests, special_requests, estimated_price, status, created_at, updated_at \
         FROM bookings WHERE id = ?1",
        params![id],
        |row| Ok(parse_booking_row(row)),
    );

    match result {
        Ok(booking) => Ok(Some(booking?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn update_booking_status(
    conn: &Connection,
    id: &str,
    status: BookingStatus,
) -> anyhow::Result<bool> {
    let now = Utc::now().naive_utc().format(DATETIME_FMT).to_string();
    let count = conn.execute(
        "UPDATE bookings SET status = ?1, updated_at = ?2 WHERE id = ?3",
        params![status.as_str(), now, id],
    )?;
    Ok(count > 0)
}

pub fn delete_booking(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM bookings WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

/// Aggregates for the admin dashboard, always read fresh from the table.
/// Revenue counts confirmed bookings only; the monthly figure keys off the
/// event date's calendar month.
pub struct DashboardStats {
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub confirmed_bookings: i64,
    pub total_revenue: i64,
    pub monthly_revenue: i64,
}

pub fn dashboard_stats(conn: &Connection) -> anyhow::Result<DashboardStats> {
    let month = Utc::now().format("%Y-%m").to_string();

    let total_bookings: i64 = conn
        .query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))
        .unwrap_or(0);

    let pending_bookings: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM bookings WHERE status = 'pending'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    let confirmed_bookings: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM bookings WHERE status = 'confirmed'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    let total_revenue: i64 = conn
        .query_row(
            "SELECT COALESCE(SUM(estimated_price), 0) FROM bookings WHERE status = 'confirmed'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    let monthly_revenue: i64 = conn
        .query_row(
            "SELECT COALESCE(SUM(estimated_price), 0) FROM bookings \
             WHERE status = 'confirmed' AND substr(date, 1, 7) = ?1",
            params![month],
            |row| row.get(0),
        )
        .unwrap_or(0);

    Ok(DashboardStats {
        total_bookings,
        pending_bookings,
        confirmed_bookings,
        total_revenue,
        monthly_revenue,
    })
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let email: String = row.get(2)?;
    let phone: String = row.get(3)?;
    let event_type_str: String = row.get(4)?;
    let date_str: String = row.get(5)?;
    let time_slot: String = row.get(6)?;
    let guests: i64 = row.get(7)?;
    let special_requests: Option<String> = row.get(8)?;
    let estimated_price: i64 = row.get(9)?;
    let status_str: String = row.get(10)?;
    let created_at_str: String = row.get(11)?;
    let updated_at_str: String = row.get(12)?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .unwrap_or_else(|_| Utc::now().date_naive());
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, DATETIME_FMT)
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let updated_at = NaiveDateTime::parse_from_str(&updated_at_str, DATETIME_FMT)
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Booking {
        id,
        name,
        email,
        phone,
        event_type: EventType::parse(&event_type_str).unwrap_or(EventType::Other),
        date,
        time_slot,
        guests,
        special_requests,
        estimated_price,
        status: BookingStatus::parse(&status_str).unwrap_or(BookingStatus::Pending),
        created_at,
        updated_at,
    })
}

// ── Contact messages ──

pub fn create_contact(conn: &Connection, message: &ContactMessage) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO contact_messages (id, name, email, phone, subject, message, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            message.id,
            message.name,
            message.email,
            message.phone,
            message.subject,
            message.message,
            message.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_contacts(conn: &Connection, limit: i64) -> anyhow::Result<Vec<ContactMessage>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, subject, message, created_at
         FROM contact_messages ORDER BY created_at DESC LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit], |row| {
        let created_at_str: String = row.get(6)?;
        Ok(ContactMessage {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            subject: row.get(4)?,
            message: row.get(5)?,
            created_at: NaiveDateTime::parse_from_str(&created_at_str, DATETIME_FMT)
                .unwrap_or_else(|_| Utc::now().naive_utc()),
        })
    })?;

    let mut messages = vec![];
    for row in rows {
        messages.push(row?);
    }
    Ok(messages)
}

// ── Users & sessions ──

pub fn get_user_by_email(conn: &Connection, email: &str) -> anyhow::Result<Option<User>> {
    let result = conn.query_row(
        "SELECT id, name, email, password_hash, role, created_at FROM users WHERE email = ?1",
        params![email],
        |row| Ok(parse_user_row(row)),
    );

    match result {
        Ok(user) => Ok(Some(user?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn create_user(conn: &Connection, user: &User) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO users (id, name, email, password_hash, role, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            user.id,
            user.name,
            user.email,
            user.password_hash,
            user.role,
            user.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

fn parse_user_row(row: &rusqlite::Row) -> anyhow::Result<User> {
    let created_at_str: String = row.get(5)?;
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        role: row.get(4)?,
        created_at: NaiveDateTime::parse_from_str(&created_at_str, DATETIME_FMT)
            .unwrap_or_else(|_| Utc::now().naive_utc()),
    })
}

pub fn create_session(
    conn: &Connection,
    token: &str,
    user_id: &str,
    created_at: &NaiveDateTime,
    expires_at: &NaiveDateTime,
) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO sessions (token, user_id, created_at, expires_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            token,
            user_id,
            created_at.format(DATETIME_FMT).to_string(),
            expires_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_session_user(conn: &Connection, token: &str) -> anyhow::Result<Option<SessionUser>> {
    let result = conn.query_row(
        "SELECT u.id, u.name, u.email, u.password_hash, u.role, u.created_at, s.token, s.expires_at
         FROM sessions s INNER JOIN users u ON u.id = s.user_id
         WHERE s.token = ?1",
        params![token],
        |row| {
            let expires_at_str: String = row.get(7)?;
            Ok((parse_user_row(row), row.get::<_, String>(6)?, expires_at_str))
        },
    );

    match result {
        Ok((user, token, expires_at_str)) => Ok(Some(SessionUser {
            user: user?,
            token,
            expires_at: NaiveDateTime::parse_from_str(&expires_at_str, DATETIME_FMT)
                .unwrap_or_else(|_| Utc::now().naive_utc()),
        })),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn delete_session(conn: &Connection, token: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM sessions WHERE token = ?1", params![token])?;
    Ok(count > 0)
}

pub fn delete_expired_sessions(conn: &Connection) -> anyhow::Result<usize> {
    let now = Utc::now().naive_utc().format(DATETIME_FMT).to_string();
    let count = conn.execute(
        "DELETE FROM sessions WHERE expires_at <= ?1",
        params![now],
    )?;
    Ok(count)
}
