// Example: a transactions table driven by simulated scroll and resize events.
//
// Run with `RUST_LOG=table_window=trace,table_window_adapter=trace` and `--features tracing`
// to see the engine's events.
use table_window::{Align, RowKey, TableRow, ViewportState};
use table_window_adapter::{Column, FrameBody, TableController, resolve_widths};
use tracing_subscriber::EnvFilter;

const CITIES: [&str; 6] = ["Lisbon", "Osaka", "Quito", "Tallinn", "Accra", "Perth"];
const DEPARTMENTS: [&str; 5] = ["Books", "Garden", "Music", "Toys", "Grocery"];
const NAMES: [&str; 6] = ["Ada", "Grace", "Linus", "Barbara", "Ken", "Radia"];

#[derive(Clone, Debug)]
struct Transaction {
    id: u64,
    sender: String,
    receiver: String,
    amount: f64,
    city: &'static str,
    department: &'static str,
    date: String,
}

impl TableRow for Transaction {
    fn row_key(&self) -> RowKey {
        self.id
    }
}

struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 16
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn generate(count: usize, seed: u64) -> Vec<Transaction> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|i| Transaction {
            id: 100_000 + i as u64,
            sender: format!("{} {}", rng.pick(&NAMES), rng.pick(&NAMES)),
            receiver: format!("{} {}", rng.pick(&NAMES), rng.pick(&NAMES)),
            amount: (rng.next_u64() % 1_000_000) as f64 / 100.0,
            city: rng.pick(&CITIES),
            department: rng.pick(&DEPARTMENTS),
            date: format!("2026-09-{:02}", 1 + rng.next_u64() % 30),
        })
        .collect()
}

fn columns() -> Vec<Column<Transaction>> {
    vec![
        Column::new("id", "ID", |t: &Transaction| t.id.into()).with_width(80),
        Column::new("sender", "Sender", |t: &Transaction| t.sender.as_str().into()),
        Column::new("receiver", "Receiver", |t: &Transaction| {
            t.receiver.as_str().into()
        }),
        Column::new("amount", "Amount", |t: &Transaction| t.amount.into())
            .with_formatter(|v| format!("${v}")),
        Column::new("city", "City", |t: &Transaction| t.city.into()),
        Column::new("department", "Department", |t: &Transaction| {
            t.department.into()
        })
        .with_row_formatter(|v, t: &Transaction| format!("{v} ({})", t.city)),
        Column::new("date", "Date", |t: &Transaction| t.date.as_str().into()),
    ]
}

fn print_frame(c: &TableController<Transaction>) {
    let frame = match c.frame() {
        Ok(frame) => frame,
        Err(err) => {
            eprintln!("window mismatch: {err}");
            return;
        }
    };
    println!(
        "-- offset={} window={:?} ({} rows total)",
        c.scroll_offset(),
        c.window(),
        frame.total_rows
    );
    match &frame.body {
        FrameBody::Placeholder { message, .. } => println!("   {message}"),
        FrameBody::Rows {
            leading_spacer,
            rows,
            trailing_spacer,
        } => {
            if let Some(s) = leading_spacer {
                println!("   [spacer {}]", s.height);
            }
            for row in rows.iter().take(3) {
                println!("   #{:<5} {}", row.index, row.cells.join(" | "));
            }
            if rows.len() > 3 {
                println!("   ... {} more materialized rows", rows.len() - 3);
            }
            if let Some(s) = trailing_spacer {
                println!("   [spacer {}]", s.height);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut c = TableController::new(generate(1_000, 42), columns(), ViewportState::default());
    println!("column widths at 1200 units: {:?}", resolve_widths(c.columns(), 1_200));

    // Scroll events arrive at arbitrary cadence; each one just recomputes the window.
    for offset in [0u64, 37, 2_000, 2_013, 20_000, 39_500, 45_000] {
        c.on_scroll(offset);
        print_frame(&c);
    }

    // Resize the container and jump to a row.
    if let Err(err) = c.on_viewport_height(700) {
        eprintln!("rejected viewport height: {err}");
    }
    c.scroll_to_row(500, Align::Center);
    print_frame(&c);

    // A zero height is a configuration error and leaves the table untouched.
    if let Err(err) = c.on_viewport_height(0) {
        println!("rejected viewport height: {err}");
    }

    // Swap in a different dataset size; the stale offset is clamped by the engine.
    c.set_rows(generate(100, 7));
    print_frame(&c);

    c.set_rows(Vec::new());
    print_frame(&c);
}
