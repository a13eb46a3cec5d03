use colored::*;
use stockpile::api::{CmdMessage, MessageLevel, StockSummary};
use stockpile::model::ItemRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const QTY_WIDTH: usize = 8;
const MONEY_WIDTH: usize = 14;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn print_items(items: &[ItemRecord], summary: Option<&StockSummary>, currency: &str) {
    if items.is_empty() {
        println!("No items in inventory.");
        return;
    }

    println!(
        "{}",
        format!(
            "{}  {:>qw$}  {:>mw$}  {:>mw$}  {}",
            pad_to_width("Item", NAME_WIDTH),
            "Qty",
            "Unit Price",
            "Stock Value",
            "ID",
            qw = QTY_WIDTH,
            mw = MONEY_WIDTH
        )
        .bold()
    );

    for record in items {
        let qty = format!("{:>w$}", record.item.quantity(), w = QTY_WIDTH);
        let qty = if record.item.quantity() == 0 {
            qty.red()
        } else {
            qty.normal()
        };
        println!(
            "{}  {}  {:>mw$}  {:>mw$}  {}",
            pad_to_width(record.item.name(), NAME_WIDTH),
            qty,
            format_money(record.item.price(), currency),
            format_money(record.item.stock_value(), currency),
            record.id.to_string().dimmed(),
            mw = MONEY_WIDTH
        );
    }

    if let Some(summary) = summary {
        println!();
        println!(
            "{} items, {} units, total stock value {}",
            summary.item_count,
            summary.total_quantity,
            format_money(summary.total_value, currency).bold()
        );
    }
}

pub fn print_item_detail(record: &ItemRecord, currency: &str) {
    println!("Item Name:   {}", record.item.name().bold());
    println!("Current Qty: {}", record.item.quantity());
    println!(
        "Unit Price:  {}",
        format_money(record.item.price(), currency)
    );
    println!(
        "Stock Value: {}",
        format_money(record.item.stock_value(), currency)
    );
    println!("ID:          {}", record.id.to_string().dimmed());
}

pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Truncate to `max_width` columns (with an ellipsis) and pad with spaces.
pub fn pad_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    if s.width() > max_width {
        for c in s.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width + char_width > max_width.saturating_sub(1) {
                break;
            }
            result.push(c);
            current_width += char_width;
        }
        result.push('…');
        current_width += 1;
    } else {
        result.push_str(s);
        current_width = s.width();
    }

    result.push_str(&" ".repeat(max_width.saturating_sub(current_width)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_money_with_two_decimals() {
        assert_eq!(format_money(20.0, "₹"), "₹20.00");
        assert_eq!(format_money(3.456, "$"), "$3.46");
    }

    #[test]
    fn pads_short_names() {
        assert_eq!(pad_to_width("Pen", 6), "Pen   ");
    }

    #[test]
    fn truncates_long_names() {
        let out = pad_to_width("A very long item name", 8);
        assert_eq!(out, "A very …");
        assert_eq!(out.width(), 8);
    }
}
