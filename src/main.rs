#![allow(dead_code)]

use interface::cli::Interface;

#[macro_use]
extern crate lazy_static;

mod game;
mod interface;
mod rules;
mod util;


fn main() {
    println!();
    println!("A Game of Falcon-Hunter Chess");
    println!();
    println!("Standard chess, except the game ends when a king is captured.");
    println!("Losing a queen, rook, bishop, or knight earns you fairy points,");
    println!("which let you enter your falcon and hunter from reserve onto an");
    println!("empty square in your own two home ranks. Type 'help' for the");
    println!("command list.");
    println!();

    let mut interface = Interface::new();
    interface.init();
}
