use defmt::info;
use rp_pico::hal::rom_data;

/// Reboots into the ROM's USB mass storage bootloader, so new firmware can be dropped
/// onto the board as a UF2 file.
pub fn reset_to_bootloader() -> ! {
    info!("Rebooting into the USB bootloader");

    rom_data::reset_to_usb_boot(0, 0);

    loop {
        cortex_m::asm::wfi();
    }
}
