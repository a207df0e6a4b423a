/*!
# Functions
*/

pub mod RND {
    /*!
    ## `RND(X)` Returns a random integer from 0 up to but not including X.
    ```text
    PRINT RND(6) + 1
     4
    ```
    X must be positive.
    */
}

pub mod USR {
    /*!
    ## `USR(R, X[, A])` Reads or writes a byte of USR memory.

    The original Tiny BASIC called machine language routines with USR.
    Two well known routines are emulated against 64K of byte memory.
    R is the routine, X the address and A the value.

    | Routine | Action |
    |---------|--------|
    | 276 | Returns the byte at X |
    | 280 | Stores A at X and returns it |

    A must be between 0 and 255. Negative addresses count back from the
    top of memory. The variable `S` starts at 256 by convention.
    ```text
    PRINT USR(280, S+10, 65)
     65
    PRINT USR(276, S+10)
     65
    ```
    */
}
