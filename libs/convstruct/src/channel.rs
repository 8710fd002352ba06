//! tokio channel endpoints carry no data of their own and convert to `Null`.

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use crate::convert::channel_endpoint;

channel_endpoint!(
    mpsc::Sender<T>,
    mpsc::Receiver<T>,
    mpsc::UnboundedSender<T>,
    mpsc::UnboundedReceiver<T>,
    oneshot::Sender<T>,
    oneshot::Receiver<T>,
    broadcast::Sender<T>,
    broadcast::Receiver<T>,
    watch::Sender<T>,
    watch::Receiver<T>,
);

#[cfg(test)]
mod tests {
    use tokio::sync::{mpsc, oneshot};

    use crate::convert::convert;
    use crate::value::DynamicValue;

    #[test]
    fn endpoints_are_null() {
        let (tx, rx) = mpsc::channel::<u32>(1);
        assert_eq!(convert(&tx, None), DynamicValue::Null);
        assert_eq!(convert(&rx, None), DynamicValue::Null);

        let (tx, rx) = oneshot::channel::<u32>();
        assert_eq!(convert(&Some(tx), None), DynamicValue::Null);
        assert_eq!(convert(&rx, None), DynamicValue::Null);
    }
}
