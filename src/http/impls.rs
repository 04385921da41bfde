pub mod bencode_formatter;
