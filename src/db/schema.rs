/// Sheets present since the first release. Every singleton sheet is pinned
/// to row `id = 1`; money columns hold decimal text.
pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS goal_balance (
    id              INTEGER PRIMARY KEY CHECK (id = 1),
    goal_amount     TEXT NOT NULL DEFAULT '0',
    current_amount  TEXT NOT NULL DEFAULT '0'
);
INSERT OR IGNORE INTO goal_balance (id, goal_amount, current_amount) VALUES (1, '0', '0');

CREATE TABLE IF NOT EXISTS records (
    id           INTEGER PRIMARY KEY,
    type         TEXT NOT NULL CHECK (type IN ('income', 'expense')),
    amount       TEXT NOT NULL,
    description  TEXT NOT NULL DEFAULT '',
    date         TEXT NOT NULL,
    created_at   TEXT NOT NULL,
    source       TEXT NOT NULL DEFAULT 'manual',
    ref_id       INTEGER
);

CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);

CREATE TABLE IF NOT EXISTS contents (
    id        INTEGER PRIMARY KEY,
    name      TEXT NOT NULL,
    cost      TEXT NOT NULL,
    category  TEXT
);

CREATE TABLE IF NOT EXISTS bosses (
    id             INTEGER PRIMARY KEY,
    name           TEXT NOT NULL,
    reward_amount  TEXT NOT NULL DEFAULT '0',
    checked        BOOLEAN NOT NULL DEFAULT 0,
    checked_at     TEXT,
    position       INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS id_counters (
    id        INTEGER PRIMARY KEY CHECK (id = 1),
    records   INTEGER NOT NULL DEFAULT 1,
    contents  INTEGER NOT NULL DEFAULT 1,
    bosses    INTEGER NOT NULL DEFAULT 1
);
INSERT OR IGNORE INTO id_counters (id, records, contents, bosses) VALUES (1, 1, 1, 1);
"#;

pub(crate) const CURRENT_VERSION: i32 = 2;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql). Every statement must be safe to re-run.
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[(
    1,
    "CREATE TABLE IF NOT EXISTS material_farming (
        id                  INTEGER PRIMARY KEY CHECK (id = 1),
        meso_per_run        TEXT NOT NULL DEFAULT '0',
        sol_erda_count      INTEGER NOT NULL DEFAULT 0,
        sol_erda_price      TEXT NOT NULL DEFAULT '0',
        material_run_count  INTEGER NOT NULL DEFAULT 0
    );
    INSERT OR IGNORE INTO material_farming
        (id, meso_per_run, sol_erda_count, sol_erda_price, material_run_count)
        VALUES (1, '0', 0, '0', 0);",
)];
