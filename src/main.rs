use nescpu::{AddressSpace, Cpu};

fn main() -> nescpu::Result<()> {
    // Put 60 in the accumulator, add 30, store at $0007, stop.
    let program: &[u8] = &[
        0xA9, 0x3C, // LDA #$3C
        0x69, 0x1E, // ADC #$1E
        0x85, 0x07, // STA $07
        0x02, // STP
    ];

    let mut memory = AddressSpace::new();
    let mut cpu = Cpu::new();
    let state = cpu.run_program(&mut memory, program)?;

    println!("state: {state:?}");
    println!("A: 0x{:02X}", cpu.a());
    println!("PC: 0x{:04X}", cpu.pc());
    println!("P (flags): 0b{:08b}", cpu.status());
    println!("mem[0x0007]: {}", memory.read(0x0007));
    Ok(())
}
