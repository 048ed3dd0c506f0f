pub struct Queue<T>(Vec<T>);
