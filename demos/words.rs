use forth_vm::{IntStack, Interpreter, OpCode};

fn main() {
    env_logger::init();
    let mut st = IntStack::with_capacity(6);
    st.push_n(&[4, 3, 2, 1]).unwrap();
    println!("start\n{}", st);

    let mut it = Interpreter::from_stack(st);
    for op in &[OpCode::TWOSWAP, OpCode::TWOOVER, OpCode::ADD, OpCode::ROT] {
        it.execute(*op).unwrap();
        println!("{}\n{}", op, it.stack());
    }

    // Fill the last slot; growing words are refused from here on.
    it.eval("dup").unwrap();
    let r = it.eval("2dup");
    println!("2dup on a full stack: {:?}\n{}", r.err().map(|e| e.to_string()), it.stack());
}
