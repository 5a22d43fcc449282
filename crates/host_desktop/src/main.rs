//! Binary entrypoint for the native desktop/mobile shell.

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

fn main() {
    host_desktop::run();
}
